use std::path::PathBuf;

use clap::Parser;
use topaz_build::bin_flags;
use topaz_build::error::BuildError;
use topaz_build::resolver::{parse_arguments, parse_simple_arguments};
use topaz_build::utils::{log, LogLevel, ToolConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Configure a Topaz engine build with CMake",
    after_help = "Environment variables:\n  TOPAZ_BUILD_LOG_LEVEL  Debug, Info, Log, Warn or Error (default Log)"
)]
struct Cli {
    /// <build_config> <render_api> <generator>, or just [generator...] with --simple
    #[arg(value_name = "TOKENS")]
    tokens: Vec<String>,
    /// Treat every token as the generator and configure a plain debug build
    #[arg(short, long)]
    simple: bool,
    /// Print the CMake command instead of running it
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// List the accepted build configs and render APIs
    #[arg(long, conflicts_with_all = ["simple", "dry_run"])]
    list: bool,
    /// Settings file to use instead of ./topaz_build.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), BuildError> {
    let spec = if cli.simple {
        parse_simple_arguments(cli.tokens.as_slice())
    } else {
        parse_arguments(cli.tokens.as_slice())?
    };
    let config = ToolConfig::load(cli.config.as_deref())?;
    bin_flags::configure(&spec, &config, cli.dry_run)
}

fn main() {
    let cli = Cli::parse();
    if cli.list {
        bin_flags::list_choices();
        return;
    }

    if let Err(e) = run(&cli) {
        log(LogLevel::Error, &e.to_string());
        std::process::exit(e.exit_code());
    }
}
