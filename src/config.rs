//! Command-line configuration and logger setup.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::engine::DEFAULT_FPS;
use crate::input::DEFAULT_FIRST_RELEASE_TIMEOUT_MS;

pub const MIN_FPS: u32 = 30;
pub const MAX_FPS: u32 = 240;

/// Two-player Pong in the terminal.
///
/// Left paddle: W/S. Right paddle: Up/Down. Enter starts, Q quits.
#[derive(Debug, Parser)]
#[command(name = "tui-pong", version)]
pub struct Args {
    /// Seed for the serve directions (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frame rate of the game loop
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(MIN_FPS as i64..=MAX_FPS as i64)
    )]
    pub fps: u32,

    /// Append logs to this file; nothing is logged without it
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Milliseconds a key may stay silent after its first press before it
    /// counts as released; raise it above the OS key repeat delay. Unused
    /// when the terminal reports key releases
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_FIRST_RELEASE_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(100..=5000)
    )]
    pub key_repeat_delay: u64,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    pub fps: u32,
    pub log_file: Option<PathBuf>,
    pub key_repeat_delay: Duration,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            seed: args.seed.unwrap_or_else(rand::random),
            fps: args.fps,
            log_file: args.log_file,
            key_repeat_delay: Duration::from_millis(args.key_repeat_delay),
        }
    }
}

/// Install `env_logger` writing to `path`.
///
/// stdout belongs to the game screen, so without a path no logger is
/// installed and every `log` call is a no-op. The filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tui-pong"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.fps, 60);
        assert!(args.log_file.is_none());
        assert_eq!(args.key_repeat_delay, 700);
    }

    #[test]
    fn key_repeat_delay_is_configurable() {
        let args = Args::try_parse_from(["tui-pong", "--key-repeat-delay", "900"]).unwrap();
        let config = Config::from_args(args);
        assert_eq!(config.key_repeat_delay, Duration::from_millis(900));
        assert!(Args::try_parse_from(["tui-pong", "--key-repeat-delay", "10"]).is_err());
    }

    #[test]
    fn explicit_seed_is_kept() {
        let args = Args::try_parse_from(["tui-pong", "--seed", "42", "--fps", "120"]).unwrap();
        let config = Config::from_args(args);
        assert_eq!(config.seed, 42);
        assert_eq!(config.fps, 120);
    }

    #[test]
    fn fps_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["tui-pong", "--fps", "10"]).is_err());
        assert!(Args::try_parse_from(["tui-pong", "--fps", "500"]).is_err());
        assert!(Args::try_parse_from(["tui-pong", "--fps", "240"]).is_ok());
    }

    #[test]
    fn log_file_path_is_parsed() {
        let args = Args::try_parse_from(["tui-pong", "--log-file", "/tmp/pong.log"]).unwrap();
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/pong.log")));
    }

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(init_logging(None).is_ok());
    }
}
