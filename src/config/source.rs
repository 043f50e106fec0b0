//! Raw configuration sources
//!
//! Every source (config file, environment, command line) is reduced to a
//! `RawSource`: normalized keys mapped to untyped `toml::Value`s. Sources
//! are merged by sequential overwrite before a single typed coercion pass.

use crate::config::defaults::{CONFIG_FILE_NAMES, CONFIG_SECTION, ENV_PREFIX};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use toml::Value;

/// Normalized key to raw value mapping
pub type RawSource = BTreeMap<String, Value>;

/// Normalize a key: `-` becomes `_`, then lower-case
///
/// `min-radius`, `MIN_RADIUS` and `min_radius` all map to `min_radius`.
pub fn normalize_key(key: &str) -> String {
    key.replace('-', "_").to_lowercase()
}

/// Build a source from arbitrary key/value pairs, normalizing every key
pub fn load_from_mapping<I, K>(mapping: I) -> RawSource
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    mapping
        .into_iter()
        .map(|(key, value)| (normalize_key(key.as_ref()), value))
        .collect()
}

/// Collect environment variables carrying the configuration prefix
///
/// The prefix is stripped and the remainder becomes the key. Values stay
/// strings until coercion.
pub fn load_from_env<I>(vars: I) -> RawSource
where
    I: IntoIterator<Item = (String, String)>,
{
    load_from_mapping(vars.into_iter().filter_map(|(key, value)| {
        key.strip_prefix(ENV_PREFIX)
            .map(|option| (option.to_string(), Value::String(value)))
    }))
}

/// Load a TOML config file
///
/// Uses the `[cursor_python]` table when present, else the whole file.
pub fn load_from_file(path: &Path) -> Result<RawSource> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound(path.to_path_buf()),
        _ => Error::Config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        )),
    })?;

    let mut table: toml::Table = content.parse().map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mapping = match table.remove(CONFIG_SECTION) {
        Some(Value::Table(section)) => section,
        Some(other) => {
            table.insert(CONFIG_SECTION.to_string(), other);
            table
        }
        None => table,
    };

    Ok(load_from_mapping(mapping))
}

/// Search a directory for the first conventional config file name
pub fn find_default_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Fold sources into one, later sources overwriting earlier ones key by key
pub fn merge_sources<'a, I>(sources: I) -> RawSource
where
    I: IntoIterator<Item = &'a RawSource>,
{
    let mut merged = RawSource::new();
    for source in sources {
        for (key, value) in source {
            merged.insert(normalize_key(key), value.clone());
        }
    }
    merged
}

/// Coerce a raw value to an integer
pub fn coerce_int(key: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Integer(i) => Ok(*i),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| Error::invalid_value(key, value)),
        _ => Err(Error::invalid_value(key, value)),
    }
}

/// Coerce a raw value to a finite real number
pub fn coerce_float(key: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Float(f) => *f,
        Value::Integer(i) => *i as f64,
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| Error::invalid_value(key, value))?,
        _ => return Err(Error::invalid_value(key, value)),
    };
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(Error::invalid_value(key, value))
    }
}

/// Coerce a raw value to a boolean
///
/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub fn coerce_bool(key: &str, value: &Value) -> Result<bool> {
    let text = match value {
        Value::Boolean(b) => return Ok(*b),
        Value::Integer(i) => i.to_string(),
        Value::String(s) => s.trim().to_lowercase(),
        _ => return Err(Error::invalid_value(key, value)),
    };
    match text.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_value(key, value)),
    }
}

/// Coerce a raw value to a string
pub fn coerce_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        _ => Err(Error::invalid_value(key, value)),
    }
}
