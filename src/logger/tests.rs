use {
    crate::logger::{Logger, format_record},
    log::Level,
    std::{
        sync::atomic::AtomicU32,
        time::{Duration, SystemTime},
    },
};

fn format(module: Option<&str>) -> String {
    let mut buffer = vec![];
    let now = SystemTime::UNIX_EPOCH + Duration::from_millis(1500);
    format_record(
        &mut buffer,
        now,
        Level::Warn,
        module,
        format_args!("{} commands", 3),
    );
    String::from_utf8(buffer).unwrap()
}

#[test]
fn with_module() {
    assert_eq!(
        format(Some("glbind::gl")),
        "[1970-01-01T00:00:01.500Z WARN  glbind::gl] 3 commands\n"
    );
}

#[test]
fn without_module() {
    assert_eq!(
        format(None),
        "[1970-01-01T00:00:01.500Z WARN ] 3 commands\n"
    );
}

#[test]
fn level_filter() {
    let logger = Logger {
        level: AtomicU32::new(Level::Info as _),
    };
    assert!(logger.enabled(Level::Error));
    assert!(logger.enabled(Level::Info));
    assert!(!logger.enabled(Level::Debug));
    logger.set_level(Level::Trace);
    assert!(logger.enabled(Level::Trace));
}
