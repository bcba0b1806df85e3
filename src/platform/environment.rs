//! Default bridge configuration sourced from the process environment.

use std::env;
use std::fs;

use serde_json::{Map, Value};

/// Environment variable holding a JSON object with default options.
pub const DEFAULTS_ENV: &str = "ONESIGNAL_DEFAULTS";
/// Environment variable naming a JSON file with default options.
pub const DEFAULTS_PATH_ENV: &str = "ONESIGNAL_DEFAULTS_PATH";
/// Environment variable forcing the platform tag (`android` or `ios`).
pub const PLATFORM_ENV: &str = "ONESIGNAL_PLATFORM";

/// Returns the default options object when one is configured.
///
/// The inline variable wins over the file; `ONESIGNAL_PLATFORM` overrides the
/// `platform` key of whichever source was found.
pub fn onesignal_defaults() -> Option<Map<String, Value>> {
    let mut defaults = defaults_from_env().or_else(defaults_from_path);
    if let Some(platform) = forced_platform() {
        defaults
            .get_or_insert_with(Map::new)
            .insert("platform".to_string(), Value::String(platform));
    }
    defaults
}

fn defaults_from_env() -> Option<Map<String, Value>> {
    let raw = env::var(DEFAULTS_ENV).ok()?;
    parse_or_ignore(&raw, DEFAULTS_ENV)
}

fn defaults_from_path() -> Option<Map<String, Value>> {
    let path = env::var(DEFAULTS_PATH_ENV).ok()?;
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            log::debug!("ignoring {DEFAULTS_PATH_ENV}: cannot read {path}: {err}");
            return None;
        }
    };
    parse_or_ignore(&content, DEFAULTS_PATH_ENV)
}

fn forced_platform() -> Option<String> {
    env::var(PLATFORM_ENV)
        .ok()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

fn parse_or_ignore(raw: &str, source: &str) -> Option<Map<String, Value>> {
    parse_json_object(raw, source)
        .map_err(|reason| log::debug!("{reason}"))
        .ok()
}

fn parse_json_object(raw: &str, source: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(format!("ignoring {source}: not a JSON object")),
        Err(err) => Err(format!("ignoring {source}: {err}")),
    }
}
