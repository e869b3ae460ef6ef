pub(crate) mod client;
pub(crate) mod config;
pub(crate) mod prompt;
