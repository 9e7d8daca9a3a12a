//! Errors raised while loading or persisting `config.ron`.

/// Errors that can occur when loading, saving, or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform exposes no per-user configuration directory.
    #[error("no user config directory available on this platform")]
    NoConfigDir,

    /// Failed to read `config.ron`.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to create the config directory or write `config.ron`.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// The file exists but is not valid RON for [`crate::Config`].
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
