#[cfg(test)]
mod tests;

use {
    log::{Level, Log, Metadata, Record},
    std::{
        cell::RefCell,
        fmt::Arguments,
        io::{Write, stderr},
        sync::{
            Arc,
            atomic::{AtomicU32, Ordering::Relaxed},
        },
        time::SystemTime,
    },
};

thread_local! {
    static BUFFER: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

pub struct Logger {
    level: AtomicU32,
}

impl Logger {
    /// Installs a logger writing to stderr.
    ///
    /// If another logger is already installed, the returned handle only
    /// controls the maximum level.
    pub fn install_stderr(level: Level) -> Arc<Self> {
        let slf = Arc::new(Self {
            level: AtomicU32::new(level as _),
        });
        let res = log::set_boxed_logger(Box::new(LogWrapper {
            logger: slf.clone(),
        }));
        if let Err(e) = res {
            let _ = writeln!(stderr(), "Could not install the logger: {}", e);
        }
        log::set_max_level(level.to_level_filter());
        slf
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as _, Relaxed);
        log::set_max_level(level.to_level_filter());
    }

    fn enabled(&self, level: Level) -> bool {
        level as u32 <= self.level.load(Relaxed)
    }
}

struct LogWrapper {
    logger: Arc<Logger>,
}

impl Log for LogWrapper {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.enabled(metadata.level())
    }

    fn log(&self, record: &Record) {
        if !self.logger.enabled(record.level()) {
            return;
        }
        BUFFER.with(|buffer| {
            let buffer = &mut *buffer.borrow_mut();
            buffer.clear();
            format_record(
                buffer,
                SystemTime::now(),
                record.level(),
                record.module_path(),
                *record.args(),
            );
            let _ = stderr().lock().write_all(buffer);
        });
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

fn format_record(
    buffer: &mut Vec<u8>,
    now: SystemTime,
    level: Level,
    module: Option<&str>,
    args: Arguments<'_>,
) {
    let now = humantime::format_rfc3339_millis(now);
    let _ = match module {
        Some(mp) => writeln!(buffer, "[{} {:5} {}] {}", now, level, mp, args),
        _ => writeln!(buffer, "[{} {:5}] {}", now, level, args),
    };
}
