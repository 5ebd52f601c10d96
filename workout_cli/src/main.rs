use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the standard config path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Skip packages that fail validation instead of aborting
    #[arg(long, global = true)]
    skip_invalid: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every configured package, or the built-in samples (default)
    Sample,

    /// Report a single package
    Report {
        /// Activity code (RUN, WLK, SWM)
        code: String,

        /// Positional sensor values in constructor order
        #[arg(allow_negative_numbers = true)]
        args: Vec<f64>,
    },
}

fn main() -> Result<()> {
    workout_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = match &cli.format {
        Some(f) => f.parse()?,
        None => config.output_format()?,
    };
    let skip_invalid = cli.skip_invalid || config.report.skip_invalid;

    match cli.command {
        Some(Commands::Report { code, args }) => cmd_report(&code, &args, format),
        Some(Commands::Sample) | None => cmd_sample(&config, format, skip_invalid),
    }
}

fn cmd_sample(config: &Config, format: OutputFormat, skip_invalid: bool) -> Result<()> {
    let packages = config.effective_packages();
    tracing::debug!("Reporting {} packages", packages.len());

    for record in process_packages(&packages, skip_invalid)? {
        println!("{}", render_record(&record, format)?);
    }

    Ok(())
}

fn cmd_report(code: &str, args: &[f64], format: OutputFormat) -> Result<()> {
    let activity = resolve(code, args)?;
    println!("{}", render_record(&activity.build_report(), format)?);
    Ok(())
}
