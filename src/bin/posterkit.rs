use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(name = "posterkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile an animation description into CSS keyframes.
    Animate(AnimateArgs),
    /// Render a poster from a request JSON file.
    Poster(PosterArgs),
    /// Ask a completion endpoint to write the whole poster.
    Delegate(DelegateArgs),
    /// Print title, content, animation and theme suggestions as JSON.
    Suggest,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Free-text animation description, e.g. "慢速旋转，无限循环".
    #[arg(long)]
    description: String,

    /// Keyword table JSON replacing the built-in vocabulary.
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Print the full artifact (name, css, extracted keywords) as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PosterArgs {
    /// Input poster request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Seed for taglines and decorations; omit for a random poster.
    #[arg(long)]
    seed: Option<u64>,

    /// Keyword table JSON replacing the built-in vocabulary.
    #[arg(long)]
    keywords: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DelegateArgs {
    /// Natural-language poster description.
    #[arg(long)]
    description: String,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Chat-completions endpoint.
    #[arg(long, env = "POSTERKIT_API_URL", default_value = posterkit::DEFAULT_API_URL)]
    api_url: String,

    /// Bearer token for the endpoint.
    #[arg(long, env = "POSTERKIT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model identifier.
    #[arg(long, env = "POSTERKIT_MODEL", default_value = posterkit::DEFAULT_MODEL)]
    model: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 600)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Animate(args) => cmd_animate(args),
        Command::Poster(args) => cmd_poster(args),
        Command::Delegate(args) => cmd_delegate(args),
        Command::Suggest => cmd_suggest(),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_keywords(path: Option<&Path>) -> anyhow::Result<posterkit::KeywordTable> {
    match path {
        Some(path) => posterkit::KeywordTable::from_path(path)
            .with_context(|| format!("load keyword table '{}'", path.display())),
        None => Ok(posterkit::KeywordTable::default()),
    }
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let table = load_keywords(args.keywords.as_deref())?;
    let artifact = posterkit::compile_description(&table, &args.description);
    if args.json {
        println!("{}", artifact.to_json_pretty()?);
    } else {
        println!("{}", artifact.css);
    }
    Ok(())
}

fn cmd_poster(args: PosterArgs) -> anyhow::Result<()> {
    let service = posterkit::PosterService::new(load_keywords(args.keywords.as_deref())?);

    let request = match posterkit::PosterRequest::from_path(&args.in_path) {
        Ok(request) => request,
        Err(err) => {
            let failure = posterkit::PosterResponse::failure(&err);
            println!("{}", failure.to_json_pretty()?);
            return Err(err).context("read poster request");
        }
    };

    let response = match args.seed {
        Some(seed) => service.generate(
            &request,
            &mut StdRng::seed_from_u64(seed),
            chrono::Local::now().naive_local(),
        ),
        None => service.generate_now(&request),
    };

    if let Some(html) = &response.poster_html {
        write_output(&args.out, html)?;
    }
    println!("{}", response.without_html().to_json_pretty()?);
    Ok(())
}

fn cmd_delegate(args: DelegateArgs) -> anyhow::Result<()> {
    let config = posterkit::CompletionConfig {
        api_url: args.api_url,
        api_key: args.api_key,
        model: args.model,
        timeout_secs: args.timeout_secs,
        ..posterkit::CompletionConfig::default()
    };
    let delegate = posterkit::PosterDelegate::from_config(config)?;
    let html = delegate.generate_poster_code(&args.description)?;
    write_output(&args.out, &html)
}

fn cmd_suggest() -> anyhow::Result<()> {
    let json =
        serde_json::to_string_pretty(&posterkit::suggestions()).context("serialize suggestions")?;
    println!("{json}");
    Ok(())
}
