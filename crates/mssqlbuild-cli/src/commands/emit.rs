use anyhow::Context;
use mssqlbuild_emit::CommandEmitter;
use std::path::Path;

pub fn emit(config_path: Option<&Path>, no_push: bool) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let mut emitter = CommandEmitter::new(&config.image);
    if no_push {
        emitter = emitter.without_push();
    }

    emitter
        .write_to(std::io::stdout().lock())
        .context("failed to write commands to stdout")?;
    Ok(())
}
