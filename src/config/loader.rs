//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DriverError, DriverResult};

use super::types::Config;

/// Project-level settings file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "qdii-deploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the ignored key, e.g. `dashboard.tag`
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    /// Dotted path the user most likely meant
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the settings were read from (`None` = built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DriverResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DriverError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for error and warning locations.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> DriverResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DriverError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let segments: Vec<&str> = key.split('.').collect();
            ConfigWarning {
                line: find_line_number(content, &segments),
                suggestion: suggest_key(&segments),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration by priority:
/// explicit `--config` file, project file, user file, built-in defaults.
/// Environment overrides apply on top of whichever layer won.
///
/// An explicit file must exist; discovered files are optional.
pub fn load_layered(explicit: Option<&Path>, project_root: &Path) -> DriverResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(project_root),
    };

    let Some(path) = candidate else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            source: None,
            warnings: Vec::new(),
        });
    };

    let (config, warnings) = load_with_warnings(&path)?;
    tracing::debug!(file = %path.display(), "loaded configuration");

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(path),
        warnings,
    })
}

fn discover(project_root: &Path) -> Option<PathBuf> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    user_config_path().filter(|p| p.is_file())
}

/// User-level settings file (`<config dir>/qdii-deploy/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("qdii-deploy/config.toml"))
}

/// Apply environment variable overrides (QDII_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // QDII_PORT
    if let Some(port) = get_env("QDII_PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.dashboard.port = port,
            Err(_) => tracing::warn!(value = %port, "ignoring invalid QDII_PORT"),
        }
    }

    if let Some(env_name) = non_empty(get_env("QDII_ENV_NAME")) {
        config.dashboard.env_name = env_name;
    }

    if let Some(image) = non_empty(get_env("QDII_IMAGE")) {
        config.image.name = image;
    }

    // An empty namespace is meaningful: push to an unqualified reference.
    if let Some(namespace) = get_env("QDII_REGISTRY_NAMESPACE") {
        config.image.namespace = namespace.trim().to_string();
    }

    if let Some(tag) = non_empty(get_env("QDII_TAG")) {
        config.image.tag = tag;
    }

    // QDII_PLATFORMS (comma-separated)
    if let Some(platforms) = get_env("QDII_PLATFORMS") {
        let parsed: Vec<String> = platforms
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.image.platforms = parsed;
        }
    }

    if let Some(engine) = non_empty(get_env("QDII_ENGINE")) {
        config.image.engine = engine;
    }

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `$XDG_CONFIG_HOME` when set, else the platform config directory.
fn dirs_config_dir() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::config_dir(),
    }
}

/// 1-based line of the ignored key: its `key = ...` inside the owning
/// table, a top-level dotted assignment, or its own `[table]` header.
fn find_line_number(content: &str, segments: &[&str]) -> Option<usize> {
    let (&leaf, tables) = segments.split_last()?;
    let table = tables.join(".");
    let dotted = segments.join(".");

    let mut section = String::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = header.trim().to_string();
            if section == dotted {
                return Some(index + 1);
            }
            continue;
        }

        let assigns = |key: &str| {
            line.strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        };
        let in_table = section == table && assigns(leaf);
        let top_level_dotted = section.is_empty() && assigns(dotted.as_str());
        if in_table || top_level_dotted {
            return Some(index + 1);
        }
    }
    None
}

/// Tables of the settings file and the keys each one understands.
const SCHEMA: &[(&str, &[&str])] = &[
    (
        "dashboard",
        &["port", "entry", "env_name", "server", "env_manager"],
    ),
    (
        "image",
        &["name", "namespace", "tag", "platforms", "context", "engine"],
    ),
];

/// Table that owns `key`, if any.
fn owning_table(key: &str) -> Option<&'static str> {
    SCHEMA
        .iter()
        .find(|(_, keys)| keys.contains(&key))
        .map(|(table, _)| *table)
}

/// Dotted path the user most likely meant.
///
/// A key placed in the wrong table points at the table that owns it;
/// otherwise the closest key of the same table within two edits.
fn suggest_key(segments: &[&str]) -> Option<String> {
    match segments {
        [leaf] => match owning_table(leaf) {
            Some(table) => Some(format!("{table}.{leaf}")),
            None => closest(leaf, SCHEMA.iter().map(|(table, _)| *table)).map(str::to_string),
        },
        [table, leaf] => {
            let (_, keys) = SCHEMA.iter().find(|(name, _)| name == table)?;
            match owning_table(leaf) {
                Some(owner) => Some(format!("{owner}.{leaf}")),
                None => closest(leaf, keys.iter().copied()).map(|key| format!("{table}.{key}")),
            }
        }
        _ => None,
    }
}

fn closest(unknown: &str, candidates: impl Iterator<Item = &'static str>) -> Option<&'static str> {
    candidates
        .map(|known| (edit_distance(unknown, known), known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known)
}

/// Levenshtein distance over chars, one row at a time.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
