use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Validation ──
    #[error("invalid tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: &'static str },

    #[error("invalid repository {repository:?}: {reason}")]
    InvalidRepository {
        repository: String,
        reason: &'static str,
    },

    #[error("invalid build argument name {name:?}: {reason}")]
    InvalidBuildArg { name: String, reason: &'static str },

    #[error("invalid target stage {target:?}: {reason}")]
    InvalidTarget {
        target: String,
        reason: &'static str,
    },

    #[error("invalid build context {context:?}: {reason}")]
    InvalidContext {
        context: String,
        reason: &'static str,
    },
}
