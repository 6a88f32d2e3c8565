//! Message keys for user-facing text.
//!
//! The composer only ever produces [`Message`] values (a key plus named
//! parameters). Turning them into display strings is the job of a
//! [`Translate`] implementation; [`Catalog`] is a small TOML-backed one.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

pub const UPLOAD_PROGRESS: &str = "photo_uploader.progress";
pub const UPLOAD_COMPLETED: &str = "photo_uploader.completed";
pub const UPLOAD_ERROR: &str = "photo_uploader.error";
pub const UPLOAD_INVALID_EXT: &str = "photo_uploader.invalid_ext";
pub const UPLOAD_SIZE_ERROR: &str = "photo_uploader.size_error";
pub const CONFIRM_UNLOAD: &str = "confirm_unload";

/// A translatable message: key and named parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub key: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl Message {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    pub fn upload_progress(file: &str, percent: u8) -> Self {
        Self::new(UPLOAD_PROGRESS)
            .with_param("file", file)
            .with_param("percent", percent)
    }

    pub fn upload_completed(file: &str) -> Self {
        Self::new(UPLOAD_COMPLETED).with_param("file", file)
    }

    pub fn upload_error(file: &str) -> Self {
        Self::new(UPLOAD_ERROR).with_param("file", file)
    }

    pub fn confirm_unload() -> Self {
        Self::new(CONFIRM_UNLOAD)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        for (name, value) in &self.params {
            write!(f, " {}={}", name, value)?;
        }
        Ok(())
    }
}

/// Maps messages to display strings.
pub trait Translate {
    fn translate(&self, message: &Message) -> String;
}

/// Flat key → template table. Templates use `{name}` placeholders.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Built-in English strings for every key the composer emits.
    pub fn english() -> Self {
        let entries = [
            (UPLOAD_PROGRESS, "{file} {percent}%"),
            (UPLOAD_COMPLETED, "{file} completed"),
            (UPLOAD_ERROR, "{file} could not be uploaded"),
            (
                UPLOAD_INVALID_EXT,
                "{file} has an invalid extension. Allowed: {extensions}",
            ),
            (UPLOAD_SIZE_ERROR, "{file} is too large. Maximum size is {limit} bytes"),
            (
                CONFIRM_UNLOAD,
                "Please confirm that you want to leave this page - data you have entered won't be saved.",
            ),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Parse a TOML document; nested tables become dotted keys.
    ///
    /// ```toml
    /// confirm_unload = "Leave?"
    /// [photo_uploader]
    /// completed = "{file} done"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        let mut entries = HashMap::new();
        flatten("", &table, &mut entries);
        Ok(Self { entries })
    }

    /// Add entries from `other`, replacing existing keys.
    pub fn extend(&mut self, other: Catalog) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            toml::Value::Table(nested) => flatten(&key, nested, out),
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            other => {
                out.insert(key, other.to_string());
            }
        }
    }
}

impl Translate for Catalog {
    /// Missing keys render as the key itself.
    fn translate(&self, message: &Message) -> String {
        let Some(template) = self.get(&message.key) else {
            return message.key.clone();
        };

        message
            .params
            .iter()
            .fold(template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}
