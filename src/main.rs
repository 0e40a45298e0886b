//! readart - Chart reading progress from plain-text reading logs

use clap::Parser;
use readart::{
    cli::Cli, data_loader::LogLoader, error::Result, output::get_formatter,
    report::ReportBuilder,
};
use readart_core::{
    config::{ParseConfig, ReportConfig},
    date_range::DateRange,
    summary::{BookSummary, Totals},
};
use readart_render::{ChartWriter, get_renderer};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Quiet by default; --verbose turns on info output unless RUST_LOG says otherwise
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("readart=info,readart_core=info,readart_render=info")
        })
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parse every log, write every chart, then print the summary
fn run(cli: &Cli) -> Result<()> {
    let parse_config = ParseConfig::from_cli(cli.year);
    let report_config = ReportConfig::new(cli.window)?;
    info!(
        "Reading logs from {} (reference year {})",
        cli.input.display(),
        parse_config.reference_year
    );

    let show_progress = !cli.json && is_terminal::is_terminal(std::io::stdout());
    let books = LogLoader::new(&cli.input, parse_config)
        .with_progress(show_progress)
        .load_books()?;

    let charts = ReportBuilder::new(report_config).build_all(&books)?;
    let writer = ChartWriter::new(&cli.output, get_renderer(cli.format));
    writer.write_all(&charts)?;

    if !cli.no_summary {
        let summaries: Vec<BookSummary> = books.iter().map(BookSummary::from_book).collect();
        let totals = Totals::from_summaries(&summaries, &DateRange::spanning(&books)?);
        let formatter = get_formatter(cli.json);
        println!("{}", formatter.format_summary(&summaries, &totals));
    }

    Ok(())
}
