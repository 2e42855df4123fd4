use std::path::PathBuf;

/// Errors surfaced outside the interpreter.
///
/// Rejected key presses are not errors; the interpreter simply ignores them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown key `{key}`")]
    UnknownKey { key: String },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
