use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Minimal `log` backend that writes `[LEVEL target] message` lines to stderr.
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger. Fails if one is already set.
    pub fn install(level: LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(record: &Record) -> String {
        format!("[{} {}] {}", record.level(), record.target(), record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", Self::format(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filter() {
        let logger = StderrLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_off_disables_everything() {
        let logger = StderrLogger::new(LevelFilter::Off);
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&error));
    }

    #[test]
    fn test_line_format() {
        let line = StderrLogger::format(
            &Record::builder()
                .level(Level::Warn)
                .target("pong_core::game")
                .args(format_args!("ball lost"))
                .build(),
        );
        assert_eq!(line, "[WARN pong_core::game] ball lost");
    }
}
