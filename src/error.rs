use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("missing argument <{name}>\nUsage: {usage}")]
    MissingArgument {
        name: &'static str,
        usage: &'static str,
    },
    #[error("unknown {kind} `{value}`, expected one of: {}", .expected.join(", "))]
    UnknownEnumValue {
        kind: &'static str,
        value: String,
        expected: Vec<&'static str>,
    },
    #[error("{} `{program}`{}", failure_verb(.code, .source), exit_suffix(.code))]
    ExternalProcessFailure {
        program: String,
        code: Option<i32>,
        #[source]
        source: Option<io::Error>,
    },
    #[error("invalid settings file {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BuildError {
    /// Exit code the binary should hand back to the shell.
    /// External failures forward the child's code when it has one.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::ExternalProcessFailure { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn failure_verb(code: &Option<i32>, source: &Option<io::Error>) -> &'static str {
    match (code, source) {
        (_, Some(_)) => "could not launch",
        (Some(_), None) => "build generator failed:",
        (None, None) => "build generator was terminated:",
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" exited with status {}", code),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_lists_every_choice() {
        let err = BuildError::UnknownEnumValue {
            kind: "render API",
            value: "metal".to_string(),
            expected: vec!["vulkan", "opengl"],
        };
        assert_eq!(
            err.to_string(),
            "unknown render API `metal`, expected one of: vulkan, opengl"
        );
    }

    #[test]
    fn external_failure_forwards_exit_code() {
        let err = BuildError::ExternalProcessFailure {
            program: "cmake".to_string(),
            code: Some(3),
            source: None,
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "build generator failed: `cmake` exited with status 3"
        );
    }

    #[test]
    fn launch_failure_exits_with_one() {
        let err = BuildError::ExternalProcessFailure {
            program: "cmake".to_string(),
            code: None,
            source: Some(io::Error::new(io::ErrorKind::NotFound, "not found")),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "could not launch `cmake`");
    }
}
