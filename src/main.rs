use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process;
use storage_estimator::cli::{Args, Commands};
use storage_estimator::logger::{self, Verbosity};
use storage_estimator::constants::{SIZE_PREFIX, SUCCESS_PREFIX};
use storage_estimator::utils::{calculate_compression_ratio, format_file_size, format_grouped_size};
use storage_estimator::validation::{parse_dimension, validate_script_path};
use storage_estimator::{error, estimate_size, info, warn, ImageFormat, Session, SessionOptions};

fn main() {
    let args = Args::parse();
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    if let Err(err) = run(args) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Interactive { no_prompt } => run_interactive(!no_prompt && !args.quiet)?,
        Commands::Run { script } => run_script(&script)?,
        Commands::Size {
            format,
            width,
            height,
        } => print_single_estimate(&format, &width, &height)?,
    }

    Ok(())
}

fn run_interactive(prompt: bool) -> Result<()> {
    info!("Enter one line per image or group:");
    info!("  <format> <width> <height>    e.g. JPEG 1920 1080");
    info!("  G <id>, <id>, ...            e.g. G 1, 2");
    info!("Formats: {}", ImageFormat::format_names().join(", "));
    info!("Finish with Q");

    let mut session = Session::new(SessionOptions::new(prompt));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout, &mut logger::diagnostics())
        .context("Failed to read commands from standard input")?;

    print_report(session);
    Ok(())
}

fn run_script(script: &Path) -> Result<()> {
    validate_script_path(script)?;
    let file = File::open(script)
        .with_context(|| format!("Failed to open command script {}", script.display()))?;

    let mut session = Session::new(SessionOptions::script());
    let mut stdout = io::stdout();
    let summary = session
        .run(BufReader::new(file), &mut stdout, &mut logger::diagnostics())
        .with_context(|| format!("Failed to read command script {}", script.display()))?;

    if summary.rejected > 0 {
        warn!("{} line(s) of {} were rejected", summary.rejected, script.display());
    }

    print_report(session);
    Ok(())
}

fn print_report(session: Session) {
    let catalog = session.into_catalog();
    print!("{}", catalog);

    let total = catalog.total_size();
    let uncompressed = catalog.uncompressed_size();
    info!(
        "{} {} images, {} stacks, {} ({})",
        SIZE_PREFIX,
        catalog.number_of_images(),
        catalog.number_of_stacks(),
        format_grouped_size(total),
        format_file_size(total)
    );
    if total < uncompressed {
        info!(
            "{} Stacking saved {:.1}%",
            SUCCESS_PREFIX,
            calculate_compression_ratio(uncompressed, total)
        );
    }
}

fn print_single_estimate(format: &str, width: &str, height: &str) -> Result<()> {
    let format: ImageFormat = format.parse()?;
    let width = parse_dimension(width)?;
    let height = parse_dimension(height)?;
    let size = estimate_size(format, width, height);

    println!(
        "{} ({}, {})px\t{} bytes",
        format,
        width,
        height,
        format_grouped_size(size)
    );
    info!("{} {}", SIZE_PREFIX, format_file_size(size));
    Ok(())
}
