use log::{Level, Log, Record};
use taskdeck::config::LoggingConfig;
use taskdeck::logger::{build_dispatch, Logger};
use tempfile::TempDir;

fn emit(log: &dyn Log, level: Level, target: &str, message: &str) {
    log.log(
        &Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .target(target)
            .build(),
    );
}

#[test]
fn test_logger_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_dispatch_feeds_memory_buffer() {
    let logger = Logger::new();
    let config = LoggingConfig::default();
    let (_, log) = build_dispatch(&config, &logger, None).unwrap().into_log();

    emit(log.as_ref(), Level::Info, "taskdeck::session", "Signed in as user 7");
    emit(log.as_ref(), Level::Debug, "taskdeck::api", "200 /api/projects");
    emit(log.as_ref(), Level::Info, "hyper::client", "connection opened");

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("INFO Signed in as user 7"));
}

#[test]
fn test_dispatch_writes_file_when_enabled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("taskdeck.log");
    let logger = Logger::new();
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
    };

    let (_, log) = build_dispatch(&config, &logger, Some(&path)).unwrap().into_log();
    emit(log.as_ref(), Level::Debug, "taskdeck::api", "200 /api/projects");
    log.flush();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("DEBUG taskdeck::api] 200 /api/projects"));
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_invalid_level_is_an_error() {
    let config = LoggingConfig {
        enabled: false,
        level: "chatty".to_string(),
    };
    assert!(build_dispatch(&config, &Logger::new(), None).is_err());
}

#[test]
fn test_logger_drops_oldest_when_full() {
    let logger = Logger::new();
    for i in 0..=taskdeck::logger::MAX_ENTRIES {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), taskdeck::logger::MAX_ENTRIES);
    assert!(logs[0].ends_with(&format!("entry {}", taskdeck::logger::MAX_ENTRIES)));
    assert!(logs.last().unwrap().ends_with("entry 1"));
}
