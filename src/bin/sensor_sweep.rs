use anyhow::{Context, Result};
use sensor_sweep::cli::Opts;
use sensor_sweep::parser::read_from_stdin_and_parse;
use sensor_sweep::{logger, report, tuning_frequency};

pub fn main() -> Result<()> {
    let opts = Opts::parse()?;
    logger::init(opts.log_level())?;

    let report = read_from_stdin_and_parse(report::parse_input).context("reading sensor report")?;
    log::info!("loaded {} sensors", report.sensors().len());

    println!("{}", report.count_excluded(opts.row));

    let gap = if opts.parallel {
        report.find_gap_par(opts.size)
    } else {
        report.find_gap(opts.size)
    }
    .with_context(|| format!("searching [0, {}] for the gap", opts.size))?;
    log::info!("gap at ({}, {})", gap.x, gap.y);

    println!("{}", tuning_frequency(gap));

    Ok(())
}
