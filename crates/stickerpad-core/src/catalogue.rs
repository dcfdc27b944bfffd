//! The fixed list of tools offered to the user.
//!
//! Each entry is a labelled pen width or stamp symbol. The catalogue is
//! supplied at startup (built in, or from JSON) and can only grow by custom
//! stamps added at runtime.

use crate::error::ConfigError;
use crate::tool::ToolState;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Pen,
    Stamp,
}

/// One selectable tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub label: String,
    pub kind: ToolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl ToolEntry {
    pub fn pen(label: impl Into<String>, width: f32) -> Self {
        Self {
            label: label.into(),
            kind: ToolKind::Pen,
            width: Some(width),
            symbol: None,
        }
    }

    pub fn stamp(label: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ToolKind::Stamp,
            width: None,
            symbol: Some(symbol.into()),
        }
    }

    /// Check the entry and produce the tool state it selects.
    pub fn tool_state(&self) -> Result<ToolState, ConfigError> {
        match self.kind {
            ToolKind::Pen => {
                let width = self.width.ok_or_else(|| ConfigError::MissingField {
                    label: self.label.clone(),
                    field: "width",
                })?;
                if !width.is_finite() || width <= 0.0 {
                    return Err(ConfigError::InvalidPenWidth {
                        label: self.label.clone(),
                        width,
                    });
                }
                Ok(ToolState::Pen { width })
            }
            ToolKind::Stamp => {
                let symbol = self.symbol.as_deref().ok_or_else(|| ConfigError::MissingField {
                    label: self.label.clone(),
                    field: "symbol",
                })?;
                if symbol.trim().is_empty() {
                    return Err(ConfigError::EmptySymbol {
                        label: self.label.clone(),
                    });
                }
                Ok(ToolState::Stamp {
                    symbol: symbol.to_string(),
                })
            }
        }
    }
}

/// Ordered, validated tool list.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCatalogue {
    entries: SmallVec<[ToolEntry; 8]>,
}

impl Default for ToolCatalogue {
    fn default() -> Self {
        Self {
            entries: SmallVec::from_vec(vec![
                ToolEntry::pen("thin", 1.0),
                ToolEntry::pen("thick", 4.0),
                ToolEntry::stamp("★", "★"),
                ToolEntry::stamp("🍪", "🍪"),
                ToolEntry::stamp("🌸", "🌸"),
            ]),
        }
    }
}

impl ToolCatalogue {
    /// Validate `entries` into a catalogue.
    pub fn new(entries: Vec<ToolEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalogue);
        }
        for (i, entry) in entries.iter().enumerate() {
            entry.tool_state()?;
            if entries[..i].iter().any(|e| e.label == entry.label) {
                return Err(ConfigError::DuplicateLabel(entry.label.clone()));
            }
        }
        Ok(Self {
            entries: SmallVec::from_vec(entries),
        })
    }

    /// Parse a JSON array of tool entries.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<ToolEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ToolEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, label: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Add a custom stamp labelled by its own symbol.
    ///
    /// If a stamp with the same symbol already exists, that entry is
    /// returned and nothing is added.
    pub fn add_stamp(&mut self, symbol: &str) -> Result<&ToolEntry, ConfigError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ConfigError::EmptySymbol {
                label: String::new(),
            });
        }
        if let Some(i) = self
            .entries
            .iter()
            .position(|e| e.symbol.as_deref() == Some(symbol))
        {
            return Ok(&self.entries[i]);
        }
        if self.find(symbol).is_some() {
            return Err(ConfigError::DuplicateLabel(symbol.to_string()));
        }
        log::debug!("custom stamp {symbol:?} added");
        self.entries.push(ToolEntry::stamp(symbol, symbol));
        Ok(&self.entries[self.entries.len() - 1])
    }
}

impl Serialize for ToolCatalogue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ToolCatalogue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<ToolEntry>::deserialize(deserializer)?;
        ToolCatalogue::new(entries).map_err(serde::de::Error::custom)
    }
}
