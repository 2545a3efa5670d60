//! Layered configuration.
//!
//! The merged record is assembled from up to five sources, later sources
//! overriding earlier ones key by key (shallow merge, object values replaced
//! whole):
//!
//! 1. built-in defaults
//! 2. global config file (`~/.config/stagehand/stagehand.json`)
//! 3. home dotfile (`~/.stagehand`)
//! 4. project config file (`<cwd>/stagehand.json`)
//! 5. project dotfile (`<cwd>/.stagehand`)
//!
//! The precedence order is fixed. A missing or malformed source contributes
//! nothing; the record is recomputed on every load.

use crate::error::Result;
use crate::files::{self, FileSystem};
use crate::paths;
use crate::toolbox::Toolbox;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub type ConfigRecord = serde_json::Map<String, Value>;

/// Typed view of the configuration keys stagehand itself consumes.
/// Unknown keys stay available in the raw merged record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default = "default_check_for_update")]
    pub check_for_update: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            check_for_update: default_check_for_update(),
        }
    }
}

fn default_check_for_update() -> bool {
    true
}

/// Outcome of reading a single configuration source. The merger ignores
/// everything but `Loaded`; callers that care (e.g. `config path`) can
/// report the reason a source was skipped.
#[derive(Debug, Clone)]
pub enum SourceOutcome {
    Loaded(ConfigRecord),
    Absent,
    Invalid(String),
}

impl SourceOutcome {
    pub fn describe(&self) -> String {
        match self {
            SourceOutcome::Loaded(record) => format!("loaded, {} keys", record.len()),
            SourceOutcome::Absent => "absent".to_string(),
            SourceOutcome::Invalid(reason) => format!("invalid: {}", reason),
        }
    }
}

/// File sources in precedence order (built-in defaults come before all of
/// them and are not a file).
pub fn source_paths(toolbox: &Toolbox) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    if let Ok(global) = paths::config_json() {
        sources.push(global);
    }
    if let Some(home) = dirs::home_dir() {
        sources.push(home.join(format!(".{}", toolbox.brand)));
    }
    sources.push(toolbox.cwd.join(format!("{}.json", toolbox.brand)));
    sources.push(toolbox.cwd.join(format!(".{}", toolbox.brand)));

    sources
}

/// Assemble the merged configuration record.
pub fn load(toolbox: &Toolbox) -> ConfigRecord {
    load_from_paths(&source_paths(toolbox))
}

/// Merge built-in defaults with the given file sources, in order.
pub fn load_from_paths(sources: &[PathBuf]) -> ConfigRecord {
    let mut record = builtin_record();
    for path in sources {
        if let SourceOutcome::Loaded(source) = read_source(path) {
            merge_into(&mut record, source);
        }
    }
    record
}

/// Typed view of the merged record; malformed values fall back to defaults.
pub fn defaults(toolbox: &Toolbox) -> Defaults {
    serde_json::from_value(Value::Object(load(toolbox))).unwrap_or_default()
}

pub fn read_source(path: &Path) -> SourceOutcome {
    if !files::local().exists(path) {
        return SourceOutcome::Absent;
    }

    let content = match files::local().read(path) {
        Ok(content) => content,
        Err(err) => return SourceOutcome::Invalid(err.to_string()),
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => SourceOutcome::Loaded(map),
        Ok(_) => SourceOutcome::Invalid("not a JSON object".to_string()),
        Err(err) => SourceOutcome::Invalid(err.to_string()),
    }
}

fn builtin_record() -> ConfigRecord {
    match serde_json::to_value(Defaults::default()) {
        Ok(Value::Object(map)) => map,
        _ => ConfigRecord::new(),
    }
}

fn merge_into(record: &mut ConfigRecord, source: ConfigRecord) {
    for (key, value) in source {
        record.insert(key, value);
    }
}

/// Serialize the merged record for display.
pub fn to_string_pretty(record: &ConfigRecord) -> Result<String> {
    serde_json::to_string_pretty(&Value::Object(record.clone()))
        .map_err(|e| crate::Error::internal_json(e.to_string(), Some("serialize config".to_string())))
}
