use log::LevelFilter;
use log4rs::{
    Config,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const LOG_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10 MB

const LOG_FILE_COUNT: u32 = 3;

pub struct LogSettings {
    pub stderr_level: LevelFilter,
    pub file_path: Option<String>,
    pub archive_pattern: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        let stderr_level = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Warn);
        Self {
            stderr_level,
            file_path: std::env::var("LOG_FILE_PATH").ok(),
            archive_pattern: std::env::var("LOG_ARCHIVE_PATTERN").ok(),
        }
    }
}

pub fn init_logger(settings: &LogSettings) -> Result<(), String> {
    let file_level = LevelFilter::Debug;

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();

    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(settings.stderr_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(file_path) = &settings.file_path {
        let archive_pattern = settings
            .archive_pattern
            .clone()
            .unwrap_or_else(|| format!("{file_path}.{{}}.gz"));

        let trigger = SizeTrigger::new(LOG_SIZE_LIMIT);
        let roller = FixedWindowRoller::builder()
            .build(&archive_pattern, LOG_FILE_COUNT)
            .map_err(|e| format!("invalid log archive pattern: {e}"))?;
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let logfile = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
            .build(file_path, Box::new(policy))
            .map_err(|e| format!("failed to open log file {file_path}: {e}"))?;

        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(file_level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    let config = config
        .build(root.build(LevelFilter::Trace))
        .map_err(|e| format!("invalid logger config: {e}"))?;

    log4rs::init_config(config).map_err(|e| format!("failed to initialize logger: {e}"))?;
    Ok(())
}
