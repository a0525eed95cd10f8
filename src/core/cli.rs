use crate::errors::{Error, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: schedgrid <SCHEDULE.json> [options]

Options:
  --config <path>      Config file (default: config.json; defaults when absent)
  --logs <dir>         Log directory (default: logs)
  --select <position>  Highlight the block at this input position
  --set KEY=VALUE      Override a config item for this run (repeatable)
  --save-config        Write the effective config back to the config file
  --json               Print the grid as JSON instead of tables
  --show-config        Print the effective config table";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub schedule_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub select: Option<usize>,
    pub overrides: Vec<(String, String)>,
    pub save_config: bool,
    pub json: bool,
    pub show_config: bool,
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut schedule_path = None;
        let mut parsed = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config_path = Self::next_value(&mut args, "--config")?.into(),
                "--logs" => parsed.logs_dir = Self::next_value(&mut args, "--logs")?.into(),
                "--select" => {
                    let raw = Self::next_value(&mut args, "--select")?;
                    let position = raw.trim().parse::<usize>().map_err(|_| {
                        Error::Parse(format!("Invalid block position for --select: '{raw}'"))
                    })?;
                    parsed.select = Some(position);
                }
                "--set" => {
                    let raw = Self::next_value(&mut args, "--set")?;
                    let (key, value) = raw.split_once('=').ok_or_else(|| {
                        Error::Parse(format!("Expected KEY=VALUE for --set, got '{raw}'"))
                    })?;
                    parsed
                        .overrides
                        .push((key.trim().to_string(), value.trim().to_string()));
                }
                "--save-config" => parsed.save_config = true,
                "--json" => parsed.json = true,
                "--show-config" => parsed.show_config = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::Parse(format!("Unknown argument: {flag}")));
                }
                _ if schedule_path.is_none() => schedule_path = Some(PathBuf::from(arg)),
                _ => return Err(Error::Parse(format!("Unexpected argument: {arg}"))),
            }
        }
        parsed.schedule_path = schedule_path
            .ok_or_else(|| Error::Parse("Missing schedule file argument".to_string()))?;
        Ok(parsed)
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .ok_or_else(|| Error::parse(format!("Missing value for {flag}")))
    }

    fn defaults() -> Self {
        Self {
            schedule_path: PathBuf::new(),
            config_path: PathBuf::from("config.json"),
            logs_dir: PathBuf::from("logs"),
            select: None,
            overrides: Vec::new(),
            save_config: false,
            json: false,
            show_config: false,
        }
    }
}
