pub(crate) mod decor;
pub(crate) mod page;
pub(crate) mod preset;
pub(crate) mod service;
pub(crate) mod theme;
