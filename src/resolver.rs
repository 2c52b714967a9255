use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::builder::GeneratorCommand;
use crate::error::BuildError;
use crate::utils::ToolConfig;

/// Usage line shown with a missing positional.
pub const USAGE: &str = "topaz_build <build_config> <render_api> <generator>";

/// Optimisation and debug-info profile the engine is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildConfiguration {
    Debug,
    Release,
    Profile,
}

impl BuildConfiguration {
    pub const ALL: [BuildConfiguration; 3] = [
        BuildConfiguration::Debug,
        BuildConfiguration::Release,
        BuildConfiguration::Profile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "debug",
            BuildConfiguration::Release => "release",
            BuildConfiguration::Profile => "profile",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl FromStr for BuildConfiguration {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| BuildError::UnknownEnumValue {
                kind: "build configuration",
                value: s.to_string(),
                expected: Self::names(),
            })
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Graphics API the engine's renderer is compiled against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderApi {
    Vulkan,
    OpenGl,
}

impl RenderApi {
    pub const ALL: [RenderApi; 2] = [RenderApi::Vulkan, RenderApi::OpenGl];

    pub fn name(self) -> &'static str {
        match self {
            RenderApi::Vulkan => "vulkan",
            RenderApi::OpenGl => "opengl",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.name()).collect()
    }
}

impl FromStr for RenderApi {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| BuildError::UnknownEnumValue {
                kind: "render API",
                value: s.to_string(),
                expected: Self::names(),
            })
    }
}

impl fmt::Display for RenderApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One validated invocation.
///
/// Fields are private so the only ways in are [`parse_arguments`],
/// [`parse_simple_arguments`] and the constructors below, all of which
/// hand back a fully valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSpecification {
    configuration: BuildConfiguration,
    render_api: Option<RenderApi>,
    generator: String,
}

impl BuildSpecification {
    pub fn new(
        configuration: BuildConfiguration,
        render_api: RenderApi,
        generator: impl Into<String>,
    ) -> Self {
        BuildSpecification {
            configuration,
            render_api: Some(render_api),
            generator: generator.into(),
        }
    }

    /// Debug build with no render API chosen, as used by the simple form.
    pub fn simple(generator: impl Into<String>) -> Self {
        BuildSpecification {
            configuration: BuildConfiguration::Debug,
            render_api: None,
            generator: generator.into(),
        }
    }

    pub fn configuration(&self) -> BuildConfiguration {
        self.configuration
    }

    pub fn render_api(&self) -> Option<RenderApi> {
        self.render_api
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }
}

/// Parses `<build_config> <render_api> <generator>`.
/// `tokens` excludes the program name. Too few tokens is reported before
/// any name is checked. Anything past the third token is
/// joined onto the generator, so an unquoted `Unix Makefiles` still works.
pub fn parse_arguments<S: AsRef<str>>(tokens: &[S]) -> Result<BuildSpecification, BuildError> {
    const POSITIONALS: [&str; 3] = ["build_config", "render_api", "generator"];
    if let Some(&name) = POSITIONALS.get(tokens.len()) {
        return Err(BuildError::MissingArgument { name, usage: USAGE });
    }

    let configuration = tokens[0].as_ref().parse::<BuildConfiguration>()?;
    let render_api = tokens[1].as_ref().parse::<RenderApi>()?;
    let generator = tokens[2..].iter().map(AsRef::<str>::as_ref).join(" ");

    Ok(BuildSpecification::new(configuration, render_api, generator))
}

/// Parses the simple form: every token is part of the generator label.
pub fn parse_simple_arguments<S: AsRef<str>>(tokens: &[S]) -> BuildSpecification {
    BuildSpecification::simple(tokens.iter().map(AsRef::<str>::as_ref).join(" "))
}

/// `<render_api>_<config>`, or just the config when no API was picked
pub fn build_directory_name(spec: &BuildSpecification) -> String {
    match spec.render_api {
        Some(api) => format!("{}_{}", api.name(), spec.configuration.name()),
        None => spec.configuration.name().to_string(),
    }
}

/// Renders the generator invocation with the default tool settings.
pub fn render_command(spec: &BuildSpecification) -> String {
    GeneratorCommand::new(spec, &ToolConfig::default()).to_string()
}
