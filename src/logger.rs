use anyhow::anyhow;
use log::{LevelFilter, Log};

static STDERR_LOGGER: StderrLogger = StderrLogger;

/// Writes every record to stderr, so stdout only carries answers.
pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "{file}:{line}: {}: {}",
            record.level(),
            record.args(),
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default()
        );
    }

    fn flush(&self) {}
}

/// Install [`StderrLogger`] as the global logger.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
    log::set_max_level(level);
    Ok(())
}
