use std::path::Path;

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "mssqlbuild.toml";

/// mssqlbuild.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MssqlBuildConfig {
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Destination repository, pushed without a tag at the end of the run
    #[serde(default = "default_repository")]
    pub repository: String,
    /// Upstream SQL Server image tags to build against
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    /// Tag always added to the set, on top of `tags`
    #[serde(default = "default_extra_tag")]
    pub extra_tag: String,
    /// Build argument that receives the current tag
    #[serde(default = "default_build_arg")]
    pub build_arg: String,
    /// Multi-stage target to build up to
    #[serde(default = "default_target")]
    pub target: String,
    /// Build context directory
    #[serde(default = "default_context")]
    pub context: String,
    /// Always fetch fresh base images instead of reusing the local cache
    #[serde(default = "default_pull")]
    pub pull: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            tags: default_tags(),
            extra_tag: default_extra_tag(),
            build_arg: default_build_arg(),
            target: default_target(),
            context: default_context(),
            pull: default_pull(),
        }
    }
}

impl MssqlBuildConfig {
    /// Load from mssqlbuild.toml in the given directory, or return defaults if not found.
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            tracing::debug!(dir = %dir.display(), "no {CONFIG_FILE_NAME} found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. A missing file is an error.
    pub fn load_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject values that would produce a malformed or unsafe shell line.
    pub fn validate(&self) -> crate::Result<()> {
        self.image.validate()
    }
}

impl ImageConfig {
    pub fn validate(&self) -> crate::Result<()> {
        validate_repository(&self.repository)?;
        for tag in self.tags.iter().chain(std::iter::once(&self.extra_tag)) {
            validate_tag(tag)?;
        }
        validate_build_arg(&self.build_arg)?;
        validate_target(&self.target)?;
        validate_context(&self.context)
    }
}

/// Docker tag grammar: `[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}`.
pub fn validate_tag(tag: &str) -> crate::Result<()> {
    let invalid = |reason| {
        Err(crate::Error::InvalidTag {
            tag: tag.to_owned(),
            reason,
        })
    };

    let Some(first) = tag.chars().next() else {
        return invalid("must not be empty");
    };
    if tag.len() > 128 {
        return invalid("must be at most 128 characters");
    }
    if !(first.is_ascii_alphanumeric() || first == '_') {
        return invalid("must start with a letter, digit, or underscore");
    }
    if !tag
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return invalid("may only contain letters, digits, '_', '.', and '-'");
    }
    Ok(())
}

/// `[host[:port]/]path`, where each path component is lowercase alphanumeric
/// runs joined by `.`, `_`, `__`, or one or more `-`.
pub fn validate_repository(repository: &str) -> crate::Result<()> {
    let invalid = |reason| {
        Err(crate::Error::InvalidRepository {
            repository: repository.to_owned(),
            reason,
        })
    };

    if repository.is_empty() {
        return invalid("must not be empty");
    }
    if repository.contains('@') {
        return invalid("must not carry a digest");
    }

    let mut components: Vec<&str> = repository.split('/').collect();
    if components.len() > 1 && is_registry_host(components[0]) {
        if !valid_host(components[0]) {
            return invalid("registry host is malformed");
        }
        components.remove(0);
    }

    for component in components {
        if component.contains(':') {
            return invalid("must not carry a tag");
        }
        if !valid_path_component(component) {
            return invalid(
                "path components must be lowercase alphanumerics separated by '.', '_', '__', or '-'",
            );
        }
    }
    Ok(())
}

pub fn validate_build_arg(name: &str) -> crate::Result<()> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(crate::Error::InvalidBuildArg {
            name: name.to_owned(),
            reason: "must match [A-Za-z_][A-Za-z0-9_]*",
        })
    }
}

pub fn validate_target(target: &str) -> crate::Result<()> {
    let mut chars = target.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid {
        Ok(())
    } else {
        Err(crate::Error::InvalidTarget {
            target: target.to_owned(),
            reason: "must match [A-Za-z0-9][A-Za-z0-9_.-]*",
        })
    }
}

pub fn validate_context(context: &str) -> crate::Result<()> {
    let invalid = |reason| {
        Err(crate::Error::InvalidContext {
            context: context.to_owned(),
            reason,
        })
    };

    if context.is_empty() {
        return invalid("must not be empty");
    }
    if context.starts_with('-') {
        return invalid("must not start with '-'");
    }
    if context.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return invalid("must not contain whitespace");
    }
    if context.chars().any(is_shell_metachar) {
        return invalid("must not contain shell metacharacters");
    }
    Ok(())
}

fn is_shell_metachar(c: char) -> bool {
    matches!(
        c,
        ';' | '&' | '|' | '$' | '`' | '\'' | '"' | '\\' | '<' | '>' | '(' | ')' | '*' | '?' | '!'
            | '{' | '}' | '[' | ']' | '#' | '~'
    )
}

// A leading component is a registry host when it looks like a hostname.
fn is_registry_host(component: &str) -> bool {
    component.contains('.') || component.contains(':') || component == "localhost"
}

fn valid_host(host: &str) -> bool {
    let (name, port) = match host.split_once(':') {
        Some((name, port)) => (name, Some(port)),
        None => (host, None),
    };
    let name_ok = !name.is_empty()
        && name
            .split('.')
            .all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            });
    let port_ok = port.is_none_or(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    name_ok && port_ok
}

fn valid_path_component(component: &str) -> bool {
    let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    let chars: Vec<char> = component.chars().collect();
    let (Some(&first), Some(&last)) = (chars.first(), chars.last()) else {
        return false;
    };
    if !is_alnum(first) || !is_alnum(last) {
        return false;
    }

    let mut separator = String::new();
    for c in chars {
        if is_alnum(c) {
            if !separator.is_empty() && !valid_separator(&separator) {
                return false;
            }
            separator.clear();
        } else if matches!(c, '.' | '_' | '-') {
            separator.push(c);
        } else {
            return false;
        }
    }
    true
}

fn valid_separator(separator: &str) -> bool {
    matches!(separator, "." | "_" | "__") || separator.chars().all(|c| c == '-')
}

fn default_repository() -> String {
    "hslaw/mssql-build".to_owned()
}

fn default_tags() -> Vec<String> {
    [
        "2017-CU1",
        "2017-CU10",
        "2017-CU2",
        "2017-CU3",
        "2017-CU4",
        "2017-CU5",
        "2017-CU6",
        "2017-CU7",
        "2017-CU8",
        "2017-CU9",
        "2017-CU9-GDR2",
        "2017-GA",
        "2017-GDR",
        "2017-GDR2",
        "2017-latest",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn default_extra_tag() -> String {
    "latest".to_owned()
}

fn default_build_arg() -> String {
    "MSSQL_BUILD_TAG".to_owned()
}

fn default_target() -> String {
    "build".to_owned()
}

fn default_context() -> String {
    ".".to_owned()
}

fn default_pull() -> bool {
    true
}
