// Mon Jan 19 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

pub struct LoggingUtils;

impl LoggingUtils {
    pub fn init_logger(level: LevelFilter) {
        let logger = Box::new(ColoredLogger::new(level));
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    /// `-v` count to level; rejected table entries only show at trace.
    pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

struct ColoredLogger {
    level: LevelFilter,
    use_color: AtomicBool,
}

impl ColoredLogger {
    fn new(level: LevelFilter) -> Self {
        Self {
            level,
            use_color: AtomicBool::new(true),
        }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = if self.use_color.load(Ordering::Relaxed) {
            self.format_level(record.level()).to_string()
        } else {
            format!("{:5}", record.level())
        };
        let target = record
            .target()
            .strip_prefix("uobject_reflector::")
            .unwrap_or(record.target());
        eprintln!("{} {} {}", level, format!("[{}]", target).dimmed(), record.args());
    }

    fn flush(&self) {}
}

/// Uses `RUST_LOG` when it is set, otherwise the coloured logger at `fallback`.
pub fn init_from_env(fallback: LevelFilter) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    } else {
        LoggingUtils::init_logger(fallback);
    }
}

pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::debug!("[TIMER] {} started", name);
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::debug!("[TIMER] {} took {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
    }
}

pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name)
}

/// Logs at every 10% step of a known amount of work.
pub struct ProgressLogger {
    name: String,
    total: usize,
    current: usize,
    last_percent: usize,
}

impl ProgressLogger {
    pub fn new(name: &str, total: usize) -> Self {
        log::debug!("[{}] Starting (0/{})", name, total);
        Self {
            name: name.to_string(),
            total,
            current: 0,
            last_percent: 0,
        }
    }

    pub fn inc(&mut self) {
        self.current += 1;
        self.maybe_log();
    }

    pub fn current(&self) -> usize {
        self.current
    }

    fn maybe_log(&mut self) {
        if self.total == 0 {
            return;
        }
        let percent = (self.current * 100) / self.total;
        if percent > self.last_percent && percent % 10 == 0 {
            log::info!("[{}] Progress: {}% ({}/{})", self.name, percent, self.current, self.total);
            self.last_percent = percent;
        }
    }

    pub fn finish(&self) {
        log::debug!("[{}] Completed ({}/{})", self.name, self.current, self.total);
    }
}

impl Drop for ProgressLogger {
    fn drop(&mut self) {
        if self.current > 0 {
            self.finish();
        }
    }
}
