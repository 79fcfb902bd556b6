use std::fmt;

/// One `docker build` invocation for a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand<'a> {
    /// Fetch base images fresh instead of reusing the local cache
    pub pull: bool,
    /// Build argument name bound to `tag`
    pub build_arg: &'a str,
    pub repository: &'a str,
    pub tag: &'a str,
    pub target: &'a str,
    pub context: &'a str,
}

impl BuildCommand<'_> {
    /// `<repository>:<tag>`
    pub fn image_ref(&self) -> String {
        format!("{}:{}", self.repository, self.tag)
    }
}

impl fmt::Display for BuildCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("docker build")?;
        if self.pull {
            f.write_str(" --pull")?;
        }
        write!(
            f,
            " --build-arg {arg}={tag} -t {image} --target {target} {context}",
            arg = self.build_arg,
            tag = self.tag,
            image = self.image_ref(),
            target = self.target,
            context = self.context,
        )
    }
}

/// `docker push` for the bare repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushCommand<'a> {
    pub repository: &'a str,
}

impl fmt::Display for PushCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "docker push {}", self.repository)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmittedCommand<'a> {
    Build(BuildCommand<'a>),
    Push(PushCommand<'a>),
}

impl fmt::Display for EmittedCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(cmd) => cmd.fmt(f),
            Self::Push(cmd) => cmd.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(tag: &str) -> BuildCommand<'_> {
        BuildCommand {
            pull: true,
            build_arg: "MSSQL_BUILD_TAG",
            repository: "hslaw/mssql-build",
            tag,
            target: "build",
            context: ".",
        }
    }

    #[test]
    fn build_line_matches_template() {
        assert_eq!(
            build("2017-CU1").to_string(),
            "docker build --pull --build-arg MSSQL_BUILD_TAG=2017-CU1 -t hslaw/mssql-build:2017-CU1 --target build ."
        );
    }

    #[test]
    fn build_line_without_pull() {
        let cmd = BuildCommand {
            pull: false,
            ..build("latest")
        };
        assert_eq!(
            cmd.to_string(),
            "docker build --build-arg MSSQL_BUILD_TAG=latest -t hslaw/mssql-build:latest --target build ."
        );
    }

    #[test]
    fn image_ref_joins_repository_and_tag() {
        assert_eq!(build("2017-GA").image_ref(), "hslaw/mssql-build:2017-GA");
    }

    #[test]
    fn build_line_uses_image_ref() {
        let cmd = BuildCommand {
            repository: "ghcr.io/acme/mssql",
            ..build("2019-CU5")
        };
        assert!(
            cmd.to_string()
                .contains(&format!(" -t {} ", cmd.image_ref()))
        );
    }

    #[test]
    fn push_line_is_untagged() {
        let cmd = PushCommand {
            repository: "r/x",
        };
        assert_eq!(cmd.to_string(), "docker push r/x");
    }

    #[test]
    fn emitted_command_delegates_display() {
        let tag = "A";
        assert_eq!(
            EmittedCommand::Build(build(tag)).to_string(),
            build(tag).to_string()
        );
        assert_eq!(
            EmittedCommand::Push(PushCommand { repository: "r/x" }).to_string(),
            "docker push r/x"
        );
    }
}
