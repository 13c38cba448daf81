use log::{Level, Metadata, Record};

pub struct SimLogger;

impl log::Log for SimLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "{} {} {}",
                Self::level_str(record.level()),
                record
                    .target()
                    .split("::")
                    .last()
                    .unwrap_or_else(|| record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

impl SimLogger {
    fn level_str(level: Level) -> &'static str {
        match level {
            Level::Error => "E",
            Level::Warn => "W",
            Level::Info => "I",
            Level::Debug => "D",
            Level::Trace => "T",
        }
    }
}
