//! clip-jig: builds the pin header clip jigs and writes STL and STEP files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::constants::BUILD_DIR_NAME;
use config::Resolution;
use jig_mesh::StlFormat;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use clip_jig::{export_all, preview, BuiltPart, Catalog, ExportOptions, JigError};

/// Builds the pin header clip drilling jigs and exports them.
#[derive(Parser, Debug)]
#[command(name = "clip-jig")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the STL and STEP files are written to
    #[arg(short, long, value_name = "DIR", default_value = BUILD_DIR_NAME)]
    output_dir: PathBuf,

    /// JSON part catalog replacing the built-in parts
    #[arg(long, value_name = "FILE")]
    spec_file: Option<PathBuf>,

    /// Only build the named part (repeatable)
    #[arg(short, long = "part", value_name = "NAME")]
    parts: Vec<String>,

    /// Fixed number of segments per hole ($fn)
    #[arg(long, value_name = "N")]
    segments: Option<u32>,

    /// Write ASCII instead of binary STL
    #[arg(long)]
    ascii_stl: bool,

    /// Skip the preview summary
    #[arg(long)]
    no_preview: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), JigError> {
    let resolution = match args.segments {
        Some(n) => Resolution::with_fn(n)?,
        None => Resolution::default(),
    };

    let catalog = match &args.spec_file {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    let catalog = catalog.filter(&args.parts)?;

    let mut parts = catalog.build(&resolution)?;

    if !args.no_preview {
        parts = parts
            .into_iter()
            .map(|part| BuiltPart {
                mesh: preview::show(&part.name, part.mesh),
                name: part.name,
            })
            .collect();
        info!("Showing CAD model(s)");
    }

    let options = ExportOptions {
        stl_format: if args.ascii_stl {
            StlFormat::Ascii
        } else {
            StlFormat::Binary
        },
        ..ExportOptions::default()
    };
    let written = export_all(&parts, &args.output_dir, &options)?;

    info!(
        parts = parts.len(),
        files = written.len(),
        output_dir = %args.output_dir.display(),
        "export complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(get_log_level(args.verbose, args.quiet));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "clip-jig failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(get_log_level(0, false), Level::INFO);
        assert_eq!(get_log_level(1, false), Level::DEBUG);
        assert_eq!(get_log_level(5, false), Level::TRACE);
        assert_eq!(get_log_level(3, true), Level::ERROR);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["clip-jig"]);
        assert_eq!(args.output_dir, PathBuf::from("build"));
        assert!(args.parts.is_empty());
        assert!(args.segments.is_none());
        assert!(!args.ascii_stl);
    }

    #[test]
    fn test_args_repeated_parts() {
        let args = Args::parse_from([
            "clip-jig",
            "--part",
            "clip_jig",
            "-p",
            "clip_jig_big_holes",
            "-vv",
        ]);
        assert_eq!(args.parts, vec!["clip_jig", "clip_jig_big_holes"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_run_writes_filtered_part() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let args = Args::parse_from([
            "clip-jig",
            "--output-dir",
            out.to_str().unwrap(),
            "--part",
            "clip_jig",
            "--segments",
            "8",
            "--no-preview",
        ]);

        run(&args).unwrap();

        assert!(out.join("clip_jig.stl").is_file());
        assert!(out.join("clip_jig.step").is_file());
        assert!(!out.join("clip_jig_big_holes.stl").exists());
    }

    #[test]
    fn test_run_rejects_bad_segments() {
        let args = Args::parse_from(["clip-jig", "--segments", "2"]);
        assert!(matches!(run(&args), Err(JigError::Config(_))));
    }
}
