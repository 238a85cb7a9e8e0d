use std::env;
use std::path::PathBuf;

const SETTINGS_DIR: &str = ".kano-settings";
const STORE_FILE: &str = "config.json";
const LOG_FILE: &str = "settings.log";
const DEFAULT_BOOT_CONFIG: &str = "/boot/config.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub boot_config_path: PathBuf,
    pub log_file: PathBuf,
    pub dry_run: bool,
    pub summary_only: bool,
}

fn parse_bool_like(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    let mut args = args.iter().peekable();
    let mut value = None;
    while let Some(arg) = args.next() {
        if let Some(rest) = arg.strip_prefix(&prefix) {
            value = Some(rest.to_string());
            continue;
        }
        if arg == flag {
            if let Some(next) = args.peek() {
                if !next.starts_with('-') {
                    value = Some(next.to_string());
                    let _ = args.next();
                }
            }
        }
    }
    value.filter(|value| !value.trim().is_empty())
}

fn flag_enabled(args: &[String], flag: &str) -> bool {
    let prefix = format!("{flag}=");
    args.iter().any(|arg| {
        if arg == flag {
            return true;
        }
        arg.strip_prefix(&prefix)
            .and_then(parse_bool_like)
            .unwrap_or(false)
    })
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_sources(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Flags win over environment variables, which win over defaults.
    pub(crate) fn from_sources(
        args: impl IntoIterator<Item = impl AsRef<str>>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect();
        let env_value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let settings_dir = env_value("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SETTINGS_DIR);

        let store_path = flag_value(&args, "--store")
            .or_else(|| env_value("KANO_SETTINGS_STORE"))
            .map(PathBuf::from)
            .unwrap_or_else(|| settings_dir.join(STORE_FILE));
        let boot_config_path = flag_value(&args, "--boot-config")
            .or_else(|| env_value("KANO_BOOT_CONFIG"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOT_CONFIG));
        let log_file = flag_value(&args, "--log-file")
            .map(PathBuf::from)
            .unwrap_or_else(|| settings_dir.join(LOG_FILE));
        let dry_run = flag_enabled(&args, "--dry-run")
            || env_value("KANO_SETTINGS_DRY_RUN")
                .and_then(|value| parse_bool_like(&value))
                .unwrap_or(false);

        Self {
            store_path,
            boot_config_path,
            log_file,
            dry_run,
            summary_only: flag_enabled(&args, "--summary"),
        }
    }
}
