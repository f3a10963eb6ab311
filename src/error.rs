//! Startup and serve errors for the host binary.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` or the `LEPTOS_*` overrides are unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
