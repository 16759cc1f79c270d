//! Sandsweep CLI - list or delete sandboxed app containers

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sandsweep::cli::Args;
use sandsweep::output::human::format_event;
use sandsweep::{
    delete_containers, format_list, format_summary, list_containers, Config, Mode, OutputFormat,
    SweepError,
};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        match e.downcast_ref::<SweepError>() {
            Some(err) if err.is_fatal_setup() => eprintln!("Setup error: {:#}", e),
            _ => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "sandsweep=debug" } else { "sandsweep=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_args(&args)?;
    tracing::debug!(root = %config.root.display(), mode = ?config.mode(), "starting");

    match config.mode() {
        Mode::List => {
            let report = list_containers(&config)
                .with_context(|| format!("cannot list {}", config.root.display()))?;
            let output = format_list(&report, &config.output_format);
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }

        Mode::Delete => {
            let human = config.output_format == OutputFormat::Human;
            let summary = delete_containers(&config, |event| {
                if human {
                    println!("{}", format_event(&event));
                }
            })?;
            println!("{}", format_summary(&summary, &config.output_format));
            summary.into_result().context("deletion partially failed")?;
            Ok(())
        }
    }
}
