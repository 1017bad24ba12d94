//! Configuration: named sections supplying query defaults
//!
//! A settings file is toml with a `[defaults]` table and any number of
//! `["custom_item/<name>"]` tables. Custom sections inherit every key they do
//! not set from `[defaults]`.
//!
//! ```toml
//! [defaults]
//! casing = "camel"
//! idle_time = 0.5
//!
//! ["custom_item/java"]
//! item_label = "Java class"
//! casing = "pascal"
//! acronym_style = "ms naming guidelines"
//! ```

use std::path::Path;
use std::time::Duration;

use regex::Regex;
use toml::{Table, Value};
use tracing::{debug, warn};

use crate::naming::codic::ACCESS_TOKEN_VAR;
use crate::naming::error::{NamingError, NamingResult};
use crate::naming::query::{AcronymKind, CasingKind, Query};

pub const DEFAULTS_SECTION: &str = "defaults";
const CUSTOM_SECTION_PATTERN: &str = r"(?i)^custom_item/(.*)$";

const DEFAULT_ITEM_LABEL: &str = "Codic:";
const DEFAULT_IDLE_TIME: f64 = 0.3;
const MIN_IDLE_TIME: f64 = 0.25;
const MAX_IDLE_TIME: f64 = 3.0;

/// Query defaults for one named entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// `defaults` or the name after `custom_item/`
    pub name: String,
    pub enabled: bool,
    pub item_label: String,
    pub project_id: String,
    pub casing: CasingKind,
    pub acronym_style: AcronymKind,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            name: DEFAULTS_SECTION.to_string(),
            enabled: true,
            item_label: DEFAULT_ITEM_LABEL.to_string(),
            project_id: String::new(),
            casing: CasingKind::None,
            acronym_style: AcronymKind::None,
        }
    }
}

impl Section {
    /// Build the query for `text` with this section's settings
    pub fn query(&self, text: &str) -> Query {
        Query::new(text, self.casing, self.acronym_style).with_project(&self.project_id)
    }

    /// Description of the entry before any text is typed
    pub fn describe(&self) -> String {
        format!("Codic Translate {}:", self.query("").settings_label())
    }
}

/// Everything read from a settings file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Enabled sections: defaults first, then custom sections in file order
    pub sections: Vec<Section>,
    pub idle_time: Duration,
    access_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sections: vec![Section::default()],
            idle_time: seconds_to_duration(DEFAULT_IDLE_TIME),
            access_token: None,
        }
    }
}

fn get_str(table: Option<&Table>, key: &str) -> Option<String> {
    table
        .and_then(|t| t.get(key))
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
}

fn get_bool(table: Option<&Table>, key: &str) -> Option<bool> {
    table.and_then(|t| t.get(key)).and_then(Value::as_bool)
}

fn get_float(table: Option<&Table>, key: &str) -> Option<f64> {
    table.and_then(|t| t.get(key)).and_then(|value| match value {
        Value::Float(f) => Some(*f),
        Value::Integer(i) => Some(*i as f64),
        _ => None,
    })
}

/// Clamp the idle time into its accepted range, warning when adjusted
fn idle_time(value: Option<f64>) -> Duration {
    let seconds = match value {
        Some(v) if v.is_finite() => {
            let clamped = v.clamp(MIN_IDLE_TIME, MAX_IDLE_TIME);
            if clamped != v {
                warn!(
                    "idle_time {} out of range [{}, {}]; using {}",
                    v, MIN_IDLE_TIME, MAX_IDLE_TIME, clamped
                );
            }
            clamped
        }
        Some(v) => {
            warn!("Invalid idle_time {}. Falling back to default: {}", v, DEFAULT_IDLE_TIME);
            DEFAULT_IDLE_TIME
        }
        None => DEFAULT_IDLE_TIME,
    };
    seconds_to_duration(seconds)
}

fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::from_millis((seconds * 1000.0).round() as u64)
}

fn read_section(table: Option<&Table>, label: &str, name: &str, fallback: &Section) -> Section {
    let casing = match get_str(table, "casing") {
        Some(value) => CasingKind::from_config(&value).unwrap_or_else(|| {
            warn!(
                "Invalid casing value in [{}] config section. Falling back to default: {}",
                label,
                CasingKind::None
            );
            CasingKind::None
        }),
        None => fallback.casing,
    };
    let acronym_style = match get_str(table, "acronym_style") {
        Some(value) => AcronymKind::from_config(&value).unwrap_or_else(|| {
            warn!(
                "Invalid acronym_style value in [{}] config section. Falling back to default: {}",
                label,
                AcronymKind::None
            );
            AcronymKind::None
        }),
        None => fallback.acronym_style,
    };

    Section {
        name: name.to_string(),
        enabled: get_bool(table, "enable").unwrap_or(fallback.enabled),
        item_label: get_str(table, "item_label").unwrap_or_else(|| fallback.item_label.clone()),
        project_id: get_str(table, "project_id").unwrap_or_else(|| fallback.project_id.clone()),
        casing,
        acronym_style,
    }
}

impl Settings {
    /// Parse settings from toml text
    pub fn from_toml_str(content: &str) -> NamingResult<Self> {
        let root: Table = toml::from_str(content)?;
        let custom_pattern =
            Regex::new(CUSTOM_SECTION_PATTERN).map_err(|e| NamingError::Config(e.to_string()))?;

        let defaults_table = root.get(DEFAULTS_SECTION).and_then(Value::as_table);
        let defaults = read_section(
            defaults_table,
            DEFAULTS_SECTION,
            DEFAULTS_SECTION,
            &Section::default(),
        );

        let mut sections = Vec::new();
        if defaults.enabled {
            sections.push(defaults.clone());
        }

        for (label, value) in &root {
            let Some(captures) = custom_pattern.captures(label) else {
                continue;
            };
            let name = captures.get(1).map_or("", |m| m.as_str()).trim();
            if name.is_empty() {
                warn!("Invalid section name: \"{}\". Skipping section.", label);
                continue;
            }
            let Some(table) = value.as_table() else {
                warn!("Section \"{}\" is not a table. Skipping section.", label);
                continue;
            };

            // The item label of a custom section defaults to its name, not to the defaults' label
            let fallback = Section {
                item_label: name.to_string(),
                ..defaults.clone()
            };
            let section = read_section(Some(table), label, name, &fallback);
            if !section.enabled {
                debug!("Section \"{}\" is disabled", label);
                continue;
            }
            debug!("Loaded section {:?}", section);
            sections.push(section);
        }

        let access_token = get_str(defaults_table, "access_token").filter(|t| !t.is_empty());

        Ok(Self {
            sections,
            idle_time: idle_time(get_float(defaults_table, "idle_time")),
            access_token,
        })
    }

    /// Read settings from a toml file
    pub fn load(path: &Path) -> NamingResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NamingError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Find a section by name or item label (case-insensitive)
    pub fn section(&self, name: &str) -> Option<&Section> {
        let name = name.trim();
        self.sections.iter().find(|section| {
            section.name.eq_ignore_ascii_case(name) || section.item_label.eq_ignore_ascii_case(name)
        })
    }

    /// The configured access token, overridden by `CODIC_ACCESS_TOKEN`
    ///
    /// # Returns
    ///
    /// * `Some(token)` - the non-blank environment value, else the
    ///   `access_token` key of `[defaults]`
    /// * `None` - neither is set
    pub fn access_token(&self) -> Option<String> {
        self.access_token_over(std::env::var(ACCESS_TOKEN_VAR).ok())
    }

    fn access_token_over(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| self.access_token.clone())
    }
}
