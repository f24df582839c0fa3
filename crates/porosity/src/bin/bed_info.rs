//! Porosity analysis of a packed bed from a JSON configuration
//!
//! The configuration must name the object bounding box CSV as `input`, and
//! may name a container bounding box CSV as `container`. Every other field
//! follows [Config].

// standard library
use std::path::PathBuf;

// pbtools modules
use pbtools_bed::BoundsCsv;
use pbtools_porosity::{run, write_outputs, Config, Error, Result};
use pbtools_utils::f;

// external crates
use clap::Parser;
use log::{error, info};

#[doc(hidden)]
fn main() {
    let cli: Cli = Cli::parse();

    if let Err(e) = try_main(&cli) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Radial porosity and particle size distributions of a packed bed
///
/// Reads the bounding box of every object in a segmented packing, keeps
/// those close enough to cubes to be spheres, and slices the resulting bed
/// into coaxial shells.
///
/// Results are written as headerless CSV files to the configured output
/// directory, and a summary is printed to stdout.
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: bed_info config.json -v"),
    term_width(70),
    override_usage("bed_info <config> [options]")
)]
struct Cli {
    // * Positional
    /// Path to the JSON configuration file
    #[arg(name = "config")]
    config: PathBuf,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv), overriding the configured verbosity. Errors and
    /// Warnings are always logged unless in quiet (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output and progress bars (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Log level for stderrlog, a verbose flag wins over the configuration
    fn verbosity(&self, config: &Config) -> usize {
        match self.verbose {
            0 => config.verbosity,
            n => n as usize + 2,
        }
    }
}

#[doc(hidden)]
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "pbtools :: bed_info");
    s += &f!("{:-<1$}", "", 70);
    s
}

#[doc(hidden)]
fn try_main(cli: &Cli) -> Result<()> {
    let mut config = Config::from_json_file(&cli.config)?;
    logging_init(cli.verbosity(&config), cli.quiet);
    info!("Using configuration {}", cli.config.display());

    if cli.quiet {
        config.disable_progress = true;
    }

    let input = config
        .input
        .as_ref()
        .ok_or_else(|| Error::InvalidConfig("no input bounds file given".to_string()))?;

    let mut source = BoundsCsv::new(input);
    if let Some(container) = &config.container {
        source = source.with_container(container);
    }

    let report = run(&source, &config)?;
    println!("{report}");

    let written = write_outputs(&report, &config.output_dir, &config.output_prefix)?;
    info!("Wrote {} files", written.len());
    Ok(())
}

#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) {
    let result = stderrlog::new()
        .modules(vec![module_path!(), "pbtools_bed", "pbtools_porosity"])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init();

    if let Err(e) = result {
        eprintln!("Warning: logging unavailable, {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_path_is_positional() {
        let cli = Cli::try_parse_from(["bed_info", "run.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("run.json"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn help_is_not_a_config_file() {
        let e = Cli::try_parse_from(["bed_info", "--help"]).err().unwrap();
        assert_eq!(e.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn missing_config_shows_help() {
        let e = Cli::try_parse_from(["bed_info"]).err().unwrap();
        assert_eq!(
            e.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn verbose_flag_overrides_config() {
        let mut config = Config::new(1.0);
        config.verbosity = 1;

        let cli = Cli::try_parse_from(["bed_info", "run.json"]).unwrap();
        assert_eq!(cli.verbosity(&config), 1);

        let cli = Cli::try_parse_from(["bed_info", "run.json", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbosity(&config), 4);
        assert!(cli.quiet);
    }
}
