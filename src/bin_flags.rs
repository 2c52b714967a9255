use crate::builder::GeneratorCommand;
use crate::error::BuildError;
use crate::resolver::{build_directory_name, BuildConfiguration, BuildSpecification, RenderApi};
use crate::utils::{log, LogLevel, ToolConfig};

///Configures a build directory for the given specification
/// # Arguments
/// * `spec` - The validated invocation
/// * `config` - Settings for the configure step
/// * `dry_run` - Only print the command, do not spawn anything
pub fn configure(
    spec: &BuildSpecification,
    config: &ToolConfig,
    dry_run: bool,
) -> Result<(), BuildError> {
    let command = GeneratorCommand::new(spec, config);
    if dry_run {
        println!("{}", command);
        return Ok(());
    }

    log(LogLevel::Log, &status_line(spec));
    command.run()
}

/// The one line printed before handing over to CMake
pub fn status_line(spec: &BuildSpecification) -> String {
    let generator = if spec.generator().is_empty() {
        "default generator".to_string()
    } else {
        format!("generator \"{}\"", spec.generator())
    };
    match spec.render_api() {
        Some(api) => format!(
            "Configuring {} build for {} with {} in {}",
            spec.configuration(),
            api,
            generator,
            build_directory_name(spec)
        ),
        None => format!(
            "Configuring {} build with {} in {}",
            spec.configuration(),
            generator,
            build_directory_name(spec)
        ),
    }
}

///Prints every accepted build config and render API
pub fn list_choices() {
    log(LogLevel::Log, "Build configurations:");
    for config in BuildConfiguration::ALL {
        log(LogLevel::Log, &format!("\t{}", config));
    }
    log(LogLevel::Log, "Render APIs:");
    for api in RenderApi::ALL {
        log(LogLevel::Log, &format!("\t{}", api));
    }
}
