//! Application configuration.
//!
//! Values come from environment variables first and can be overridden on the
//! command line:
//!
//! ```text
//! polygrid [--width N] [--height N] [--data-dir DIR] [--file PATH] [--log PATH]
//! polygrid show [PATH] [same flags]
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use crate::store::StoreConfig;
use crate::types::GridSize;

/// Log file name inside the data directory
pub const LOG_FILE: &str = "polygrid.log";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub grid: GridSize,
    pub store: StoreConfig,
    /// Explicit log file; `None` means [`LOG_FILE`] in the data directory
    pub log_path: Option<PathBuf>,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal editor
    Run(AppConfig),
    /// Print a saved document; `path` defaults to the export file
    Show { config: AppConfig, path: PathBuf },
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let mut grid = GridSize::default();
        if let Some(v) = non_empty_var("POLYGRID_WIDTH") {
            grid.width = parse_dimension("POLYGRID_WIDTH", &v)?;
        }
        if let Some(v) = non_empty_var("POLYGRID_HEIGHT") {
            grid.height = parse_dimension("POLYGRID_HEIGHT", &v)?;
        }

        Ok(Self {
            grid,
            store: StoreConfig::from_env(),
            log_path: non_empty_var("POLYGRID_LOG_PATH").map(PathBuf::from),
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_path
            .clone()
            .unwrap_or_else(|| self.store.data_dir.join(LOG_FILE))
    }
}

/// Parse command-line arguments (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: AppConfig) -> Result<Command> {
    let mut config = base;
    let mut show = false;
    let mut show_path: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--width" | "--height" | "--data-dir" | "--file" | "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", arg))?;
                match arg {
                    "--width" => config.grid.width = parse_dimension(arg, v)?,
                    "--height" => config.grid.height = parse_dimension(arg, v)?,
                    "--data-dir" => config.store.data_dir = PathBuf::from(v),
                    "--file" => config.store.export_path = PathBuf::from(v),
                    _ => config.log_path = Some(PathBuf::from(v)),
                }
            }
            "show" if i == 0 => show = true,
            other if other.starts_with("--") => bail!("unknown argument: {}", other),
            other if show && show_path.is_none() => show_path = Some(PathBuf::from(other)),
            other => bail!("unexpected argument: {}", other),
        }
        i += 1;
    }

    if show {
        let path = show_path.unwrap_or_else(|| config.store.export_path.clone());
        Ok(Command::Show { config, path })
    } else {
        Ok(Command::Run(config))
    }
}

fn parse_dimension(name: &str, value: &str) -> Result<u16> {
    match value.trim().parse::<u16>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(anyhow!("invalid {} value: {}", name, value)),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn base() -> AppConfig {
        AppConfig {
            grid: GridSize::default(),
            store: StoreConfig {
                data_dir: PathBuf::from("/data"),
                export_path: PathBuf::from("state.json"),
            },
            log_path: None,
        }
    }

    #[test]
    fn parse_args_defaults_to_run() {
        let cmd = parse_args(&[], base()).unwrap();
        assert_eq!(cmd, Command::Run(base()));
    }

    #[test]
    fn parse_args_applies_overrides() {
        let cmd = parse_args(
            &args(&["--width", "12", "--height", "8", "--data-dir", "/tmp/pg"]),
            base(),
        )
        .unwrap();
        let Command::Run(config) = cmd else {
            panic!("expected run");
        };
        assert_eq!(config.grid, GridSize::new(12, 8));
        assert_eq!(config.store.data_dir, PathBuf::from("/tmp/pg"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/pg").join(LOG_FILE));
    }

    #[test]
    fn parse_args_show_uses_export_path_by_default() {
        let cmd = parse_args(&args(&["show"]), base()).unwrap();
        assert_eq!(
            cmd,
            Command::Show {
                config: base(),
                path: PathBuf::from("state.json")
            }
        );

        let cmd = parse_args(&args(&["show", "other.json", "--log", "x.log"]), base()).unwrap();
        let Command::Show { config, path } = cmd else {
            panic!("expected show");
        };
        assert_eq!(path, PathBuf::from("other.json"));
        assert_eq!(config.log_path(), PathBuf::from("x.log"));
    }

    #[test]
    fn parse_args_rejects_bad_input() {
        assert!(parse_args(&args(&["--width"]), base()).is_err());
        assert!(parse_args(&args(&["--width", "0"]), base()).is_err());
        assert!(parse_args(&args(&["--height", "tall"]), base()).is_err());
        assert!(parse_args(&args(&["--verbose"]), base()).is_err());
        assert!(parse_args(&args(&["stray"]), base()).is_err());
        assert!(parse_args(&args(&["show", "a.json", "b.json"]), base()).is_err());
    }
}
