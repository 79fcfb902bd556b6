use anyhow::Context;
use mssqlbuild_core::TagSet;
use std::io::Write;
use std::path::Path;

pub fn tags(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let tags = TagSet::from_config(&config.image);

    let mut out = std::io::stdout().lock();
    for tag in tags.iter() {
        writeln!(out, "{tag}").context("failed to write tags to stdout")?;
    }
    out.flush().context("failed to write tags to stdout")?;
    Ok(())
}
