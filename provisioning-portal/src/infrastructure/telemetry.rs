use serde::Deserialize;
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Logging settings under `telemetry`.
///
/// One filter applies to every output. `RUST_LOG`, when set, is read after
/// `level` and before `directives`.
#[derive(Deserialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    #[serde(default)]
    pub level: LogLevel,
    /// `EnvFilter` directives, e.g. `sqlx=warn,actix_web=info`.
    #[serde(default)]
    pub directives: String,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub file: FileConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            level: Default::default(),
            directives: Default::default(),
            console: Default::default(),
            file: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LogLevel> for LevelFilter {
    fn from(val: LogLevel) -> Self {
        match val {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ConsoleConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Adds source location, thread id and target to every line.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            verbose: false,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct FileConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_directory")]
    pub directory: String,
    /// File name, or its prefix when rotating.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub rotation: LogRotation,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enable: false,
            verbose: false,
            directory: default_directory(),
            file_name: default_file_name(),
            rotation: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(val: LogRotation) -> Self {
        match val {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_directory() -> String {
    "./logs".to_string()
}

fn default_file_name() -> String {
    "provisioning-portal.log".to_string()
}

/// Malformed directives are skipped.
fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    let level: LevelFilter = config.level.into();
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    config
        .directives
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .filter_map(|d| d.parse::<Directive>().ok())
        .fold(filter, EnvFilter::add_directive)
}

pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let console = config.console.enable.then(|| {
        let verbose = config.console.verbose;
        tracing_subscriber::fmt::layer()
            .with_file(verbose)
            .with_line_number(verbose)
            .with_thread_ids(verbose)
            .with_target(verbose)
    });
    let file = config.file.enable.then(|| {
        let verbose = config.file.verbose;
        let appender = RollingFileAppender::new(
            config.file.rotation.into(),
            &config.file.directory,
            &config.file.file_name,
        );
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(appender)
            .with_file(verbose)
            .with_line_number(verbose)
            .with_thread_ids(verbose)
            .with_target(verbose)
    });
    Registry::default()
        .with(console.map(|layer| layer.with_filter(env_filter(config))))
        .with(file.map(|layer| layer.with_filter(env_filter(config))))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn settings_default_to_console_info() {
        let config = TelemetryConfig::default();
        assert!(config.console.enable);
        assert!(!config.file.enable);
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.file.rotation, LogRotation::Daily);
    }

    #[test]
    fn settings_read_lowercase_names() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                indoc! {"
                    level: debug
                    directives: sqlx=warn
                    file:
                      enable: true
                      rotation: hourly
                "},
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<TelemetryConfig>()
            .unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.directives, "sqlx=warn");
        assert!(config.file.enable);
        assert_eq!(config.file.rotation, LogRotation::Hourly);
        assert_eq!(config.file.file_name, "provisioning-portal.log");
    }

    #[test]
    fn directives_extend_default_level() {
        let config = TelemetryConfig {
            level: LogLevel::Warn,
            directives: "sqlx=error, ,provisioning_portal=debug".into(),
            ..Default::default()
        };
        let filter = env_filter(&config).to_string();
        assert!(filter.contains("sqlx=error"));
        assert!(filter.contains("provisioning_portal=debug"));
    }
}
