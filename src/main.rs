//! adstat - Marketing performance reports over monthly ad platform data

use adstat::{
    aggregation::{compute_kpis, group_by_month, kpis_by_platform, sort_grouped},
    cli::{Cli, Command, ReportArgs, parse_month_selection, parse_year_filter},
    dataset::monthly_data,
    error::Result,
    filters::ReportFilter,
    output::get_formatter,
    types::SortConfig,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Quiet by default; --verbose enables info output
    // and RUST_LOG still takes precedence when set.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("adstat=info"))
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Plain output when piped
    if !is_terminal::is_terminal(std::io::stdout()) {
        colored::control::set_override(false);
    }

    let year = parse_year_filter(&cli.year)?;
    let months = parse_month_selection(&cli.months)?;
    let report_filter = ReportFilter::new()
        .with_year(year)
        .with_platform(cli.platform)
        .with_months(months);

    let dataset = monthly_data();
    let records = report_filter.apply(dataset);
    info!(
        "selected {} of {} records (year={}, platform={})",
        records.len(),
        dataset.len(),
        year,
        cli.platform
    );

    let formatter = get_formatter(cli.json);

    let output = match cli.command.unwrap_or(Command::Report(ReportArgs::default())) {
        Command::Report(args) => {
            info!("running full report sorted by {:?} {:?}", args.sort, args.direction);
            let kpis = compute_kpis(&records);
            let groups = group_by_month(&records);
            let sorted = sort_grouped(&groups, SortConfig::new(args.sort, args.direction));
            formatter.format_dashboard(&kpis, &sorted, args.expand)
        }
        Command::Kpis => {
            info!("running KPI summary");
            formatter.format_kpis(&compute_kpis(&records))
        }
        Command::Platforms => {
            info!("running per-platform comparison");
            formatter.format_platforms(&kpis_by_platform(&records))
        }
    };

    println!("{output}");
    Ok(())
}
