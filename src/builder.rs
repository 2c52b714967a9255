use crate::error::BuildError;
use crate::resolver::{build_directory_name, BuildSpecification};
use crate::utils::{log, LogLevel, ToolConfig};
use std::fmt;
use std::process::Command;

/// A fully resolved CMake configure step
///
/// Program and arguments are kept apart so running it never re-splits the
/// generator label; `Display` gives the quoted one-line form for humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    pub program: String,
    pub build_dir: String,
    pub defines: Vec<(String, String)>,
    pub generator: Option<String>,
    pub source_dir: String,
}

impl GeneratorCommand {
    pub fn new(spec: &BuildSpecification, config: &ToolConfig) -> Self {
        let build_dir = format!(
            "{}/{}",
            config.build_root.trim_end_matches('/'),
            build_directory_name(spec)
        );

        let mut defines = vec![(
            config.config_define.clone(),
            spec.configuration().name().to_string(),
        )];
        if let Some(api) = spec.render_api() {
            defines.push((config.render_api_define.clone(), api.name().to_string()));
        }

        // empty label means let CMake pick its default generator
        let generator = if spec.generator().is_empty() {
            None
        } else {
            Some(spec.generator().to_string())
        };

        GeneratorCommand {
            program: config.cmake.clone(),
            build_dir,
            defines,
            generator,
            source_dir: config.source_dir.clone(),
        }
    }

    /// Arguments as handed to the process, generator label unquoted
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["-B".to_string(), self.build_dir.clone()];
        for (key, value) in &self.defines {
            args.push(format!("-D{}={}", key, value));
        }
        if let Some(generator) = &self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }
        args.push("-S".to_string());
        args.push(self.source_dir.clone());
        args
    }

    /// Runs the configure step and waits for it.
    /// Output goes straight to the terminal. A non-zero exit or a failed
    /// launch comes back as `ExternalProcessFailure`.
    pub fn run(&self) -> Result<(), BuildError> {
        log(LogLevel::Info, &format!("  Command: {}", self));
        let status = Command::new(&self.program)
            .args(self.args())
            .status()
            .map_err(|why| BuildError::ExternalProcessFailure {
                program: self.program.clone(),
                code: None,
                source: Some(why),
            })?;

        if status.success() {
            log(LogLevel::Info, "  Configure successful");
            Ok(())
        } else {
            Err(BuildError::ExternalProcessFailure {
                program: self.program.clone(),
                code: status.code(),
                source: None,
            })
        }
    }
}

impl fmt::Display for GeneratorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -B {}", self.program, self.build_dir)?;
        for (key, value) in &self.defines {
            write!(f, " -D{}={}", key, value)?;
        }
        if let Some(generator) = &self.generator {
            write!(f, " -G {}", quote(generator))?;
        }
        write!(f, " -S {}", self.source_dir)
    }
}

/// Wraps `s` in double quotes, escaping `"` and `\`
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{parse_arguments, parse_simple_arguments, render_command};

    #[test]
    fn debug_vulkan_unix_makefiles() {
        let spec = parse_arguments(&["debug", "vulkan", "Unix Makefiles"]).unwrap();
        let cmd = render_command(&spec);
        assert_eq!(
            cmd,
            "cmake -B build/vulkan_debug -DTOPAZ_BUILDCONFIG=debug -DTOPAZ_RENDERAPI=vulkan -G \"Unix Makefiles\" -S ."
        );
        assert!(cmd.contains("build/vulkan_debug"));
        assert!(cmd.contains("\"Unix Makefiles\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let spec = parse_arguments(&["profile", "opengl", "MinGW Makefiles"]).unwrap();
        assert_eq!(render_command(&spec), render_command(&spec));
        assert!(render_command(&spec).contains("-G \"MinGW Makefiles\""));
    }

    #[test]
    fn simple_form_without_generator_has_no_generator_option() {
        let empty: [&str; 0] = [];
        let spec = parse_simple_arguments(&empty);
        let cmd = render_command(&spec);
        assert_eq!(cmd, "cmake -B build/debug -DTOPAZ_BUILDCONFIG=debug -S .");
        assert!(!cmd.contains("-G"));
        assert!(!cmd.contains("RENDERAPI"));
    }

    #[test]
    fn explicit_empty_generator_leaves_the_choice_to_cmake() {
        let spec = parse_arguments(&["debug", "vulkan", ""]).unwrap();
        assert_eq!(
            render_command(&spec),
            "cmake -B build/vulkan_debug -DTOPAZ_BUILDCONFIG=debug -DTOPAZ_RENDERAPI=vulkan -S ."
        );
        let command = GeneratorCommand::new(&spec, &ToolConfig::default());
        assert_eq!(command.generator, None);
        assert!(!command.args().contains(&"-G".to_string()));
    }

    #[test]
    fn args_keep_the_generator_whole() {
        let spec = parse_arguments(&["release", "opengl", "Visual Studio 17 2022"]).unwrap();
        let args = GeneratorCommand::new(&spec, &ToolConfig::default()).args();
        assert_eq!(
            args,
            vec![
                "-B",
                "build/opengl_release",
                "-DTOPAZ_BUILDCONFIG=release",
                "-DTOPAZ_RENDERAPI=opengl",
                "-G",
                "Visual Studio 17 2022",
                "-S",
                "."
            ]
        );
    }

    #[test]
    fn settings_override_program_and_paths() {
        let config = ToolConfig {
            cmake: "/opt/cmake/bin/cmake".to_string(),
            build_root: "out/".to_string(),
            source_dir: "engine".to_string(),
            config_define: "TZ_CONFIG".to_string(),
            render_api_define: "TZ_API".to_string(),
        };
        let spec = parse_arguments(&["debug", "opengl", "Ninja"]).unwrap();
        assert_eq!(
            GeneratorCommand::new(&spec, &config).to_string(),
            "/opt/cmake/bin/cmake -B out/opengl_debug -DTZ_CONFIG=debug -DTZ_API=opengl -G \"Ninja\" -S engine"
        );
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("a \"b\" c"), "\"a \\\"b\\\" c\"");
        assert_eq!(quote("C:\\gen"), "\"C:\\\\gen\"");
    }
}
