use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record<'_>) {
		if self.enabled(record.metadata()) {
			eprintln!("{}: {}", level_label(record.level()), record.args());
		}
	}

	fn flush(&self) {}
}

/// Install the stderr logger; `verbosity` counts `-v` flags.
pub fn init(verbosity: u8) {
	let filter = match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	if log::set_logger(&LOGGER).is_ok() {
		log::set_max_level(filter);
	}
}

fn level_label(level: Level) -> &'static str {
	match level {
		Level::Error => "error",
		Level::Warn => "warn",
		Level::Info => "info",
		Level::Debug => "debug",
		Level::Trace => "trace",
	}
}
