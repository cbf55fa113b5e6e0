use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use tpasweep::config::SweepConfig;
use tpasweep::output::{OutputFormat, create_formatter};
use tpasweep::summary::SweepSummary;
use tpasweep::sweep::TpaPoint;

#[derive(Parser, Debug)]
#[command(name = "tpasweep")]
#[command(about = "Compare fixed-wing TPA factor models across an airspeed sweep", long_about = None)]
struct Args {
    /// TOML file with sweep bounds (start, stop, step)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First airspeed in cm/s
    #[arg(long)]
    start: Option<f32>,

    /// Exclusive sweep upper bound in cm/s
    #[arg(long)]
    stop: Option<f32>,

    /// Airspeed increment in cm/s
    #[arg(long)]
    step: Option<f32>,

    /// Output format: csv, text, json
    #[arg(short = 'f', long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Emit a column header before the data rows
    #[arg(long)]
    header: bool,

    /// Print per-column statistics to stderr after the sweep
    #[arg(short, long)]
    summary: bool,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match args.config {
        Some(ref path) => SweepConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load sweep config from {}", path.display()))?,
        None => SweepConfig::default(),
    };

    if let Some(start) = args.start {
        config.start = start;
    }
    if let Some(stop) = args.stop {
        config.stop = stop;
    }
    if let Some(step) = args.step {
        config.step = step;
    }
    config.validate()?;

    log::debug!(
        "Sweeping airspeed {} to {} cm/s in {} cm/s steps",
        config.start,
        config.stop,
        config.step
    );

    let formatter = create_formatter(args.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.header {
        if let Some(header) = formatter.header() {
            writeln!(out, "{}", header)?;
        }
    }

    let points: Vec<TpaPoint> = config.points().collect();
    for point in &points {
        writeln!(out, "{}", formatter.format(point))?;
    }
    out.flush()?;

    log::info!("Swept {} airspeed values", points.len());

    if args.summary {
        print_summary(&SweepSummary::from_points(&points), args.format)?;
    }

    Ok(())
}

fn print_summary(summary: &SweepSummary, format: OutputFormat) -> anyhow::Result<()> {
    if matches!(format, OutputFormat::Json) {
        eprintln!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    eprintln!();
    eprintln!(
        "{:<10} {:>6} {:>9} {:>9} {:>9} {:>9}",
        "Model", "Count", "Mean", "Std", "Min", "Max"
    );
    for (name, stats) in [("reference", &summary.reference), ("smooth", &summary.smooth)] {
        match stats {
            Some(s) => eprintln!(
                "{:<10} {:>6} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
                name, s.count, s.mean, s.std_dev, s.min, s.max
            ),
            None => eprintln!("{:<10} {:>6}", name, 0),
        }
    }
    eprintln!(
        "Max divergence: {:.4} at {:.1} cm/s",
        summary.max_divergence, summary.max_divergence_airspeed
    );
    Ok(())
}
