use std::io::{self, Write};

use mssqlbuild_core::{ImageConfig, TagSet};

use crate::command::{BuildCommand, EmittedCommand, PushCommand};

/// Turns an [`ImageConfig`] into the `docker build` / `docker push` lines.
pub struct CommandEmitter<'a> {
    config: &'a ImageConfig,
    tags: TagSet,
    push: bool,
}

impl<'a> CommandEmitter<'a> {
    pub fn new(config: &'a ImageConfig) -> Self {
        Self {
            config,
            tags: TagSet::from_config(config),
            push: true,
        }
    }

    /// Omit the trailing push line.
    pub fn without_push(mut self) -> Self {
        self.push = false;
        self
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// One build command per distinct tag, followed by the push command.
    pub fn generate(&self) -> Vec<EmittedCommand<'_>> {
        let mut commands: Vec<EmittedCommand<'_>> = self
            .tags
            .iter()
            .map(|tag| EmittedCommand::Build(self.build_command(tag)))
            .collect();
        if self.push {
            commands.push(EmittedCommand::Push(self.push_command()));
        }
        commands
    }

    pub fn build_command<'t>(&'t self, tag: &'t str) -> BuildCommand<'t> {
        BuildCommand {
            pull: self.config.pull,
            build_arg: &self.config.build_arg,
            repository: &self.config.repository,
            tag,
            target: &self.config.target,
            context: &self.config.context,
        }
    }

    pub fn push_command(&self) -> PushCommand<'_> {
        PushCommand {
            repository: &self.config.repository,
        }
    }

    /// All lines, each newline-terminated.
    pub fn render(&self) -> String {
        self.generate()
            .iter()
            .map(|cmd| format!("{cmd}\n"))
            .collect()
    }

    /// Write every line to `out`, flushing at the end.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        let commands = self.generate();
        tracing::debug!(
            repository = %self.config.repository,
            lines = commands.len(),
            "emitting commands"
        );
        for cmd in &commands {
            writeln!(out, "{cmd}")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tags: &[&str], extra: &str, repository: &str) -> ImageConfig {
        ImageConfig {
            repository: repository.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            extra_tag: extra.to_owned(),
            ..ImageConfig::default()
        }
    }

    #[test]
    fn duplicate_extra_tag_yields_three_lines() {
        let config = config(&["A", "B"], "A", "r/x");
        let output = CommandEmitter::new(&config).render();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "docker build --pull --build-arg MSSQL_BUILD_TAG=A -t r/x:A --target build .",
                "docker build --pull --build-arg MSSQL_BUILD_TAG=B -t r/x:B --target build .",
                "docker push r/x",
            ]
        );
    }

    #[test]
    fn empty_list_yields_extra_tag_and_push() {
        let config = config(&[], "only", "r/x");
        let output = CommandEmitter::new(&config).render();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("MSSQL_BUILD_TAG=only"));
        assert_eq!(lines[1], "docker push r/x");
    }

    #[test]
    fn without_push_drops_final_line() {
        let config = config(&["A", "B"], "C", "r/x");
        let emitter = CommandEmitter::new(&config).without_push();
        let commands = emitter.generate();

        assert_eq!(commands.len(), 3);
        assert!(
            commands
                .iter()
                .all(|cmd| matches!(cmd, EmittedCommand::Build(_)))
        );
    }

    #[test]
    fn write_to_matches_render() {
        let config = ImageConfig::default();
        let emitter = CommandEmitter::new(&config);

        let mut buf = Vec::new();
        emitter.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), emitter.render());
    }

    #[test]
    fn write_to_propagates_io_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let config = ImageConfig::default();
        let err = CommandEmitter::new(&config).write_to(Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn tags_exposes_resolved_set() {
        let config = config(&["B", "A"], "A", "r/x");
        let emitter = CommandEmitter::new(&config);
        assert_eq!(emitter.tags().iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
