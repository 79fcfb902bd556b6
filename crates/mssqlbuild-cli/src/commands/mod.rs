mod emit;
mod tags;
mod version;

pub use emit::emit;
pub use tags::tags;
pub use version::version;

use mssqlbuild_core::MssqlBuildConfig;
use std::path::Path;

/// Explicit `--config` path, else `./mssqlbuild.toml`, else built-in defaults.
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<MssqlBuildConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using explicit config file");
            MssqlBuildConfig::load_file(path)?
        }
        None => {
            tracing::debug!("looking for config in working directory");
            MssqlBuildConfig::load(Path::new("."))?
        }
    };
    Ok(config)
}
