use crate::config::Config;
use crate::core::cli::CliArgs;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};

/// Config and logger for one CLI run, with command-line overrides applied.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
}

impl AppContext {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let mut config = Config::load_or_default(&args.config_path)?;
        let changes =
            config.set_many(args.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

        let logger = Logger::in_dir(&args.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());
        logger.set_console_quiet(args.json);

        for (key, old, new) in &changes {
            logger.info(
                format!("Config override {key}: {old} -> {new}"),
                LogTarget::FileOnly,
            );
        }

        if args.save_config {
            config.save()?;
            logger.info(
                format!("Saved config to {}", config.path().display()),
                LogTarget::ConsoleAndFile,
            );
        }

        Ok(Self { config, logger })
    }
}
