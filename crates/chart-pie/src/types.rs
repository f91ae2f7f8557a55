//! Pie input data

use chart_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named, non-negative value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieEntry {
    pub name: String,
    pub value: f64,
}

impl PieEntry {
    /// Create a validated entry
    pub fn new(name: impl Into<String>, value: f64) -> Result<Self> {
        let name = name.into();
        if !value.is_finite() {
            return Err(Error::non_finite(&format!("value of '{name}'")));
        }
        if value < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "value of '{name}' must be non-negative, got {value}"
            )));
        }
        Ok(Self { name, value })
    }
}

impl fmt::Display for PieEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Entries in insertion order
///
/// Wedge angles depend on the order entries were added, so this is a list
/// rather than a map. Names are unique.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieSeries {
    entries: Vec<PieEntry>,
}

impl PieSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs, in order
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut series = Self::new();
        for (name, value) in pairs {
            series.add(name, value)?;
        }
        Ok(series)
    }

    /// Append an entry; names already in use are rejected
    pub fn add(&mut self, name: impl Into<String>, value: f64) -> Result<&mut Self> {
        let entry = PieEntry::new(name, value)?;
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(Error::InvalidParameter(format!(
                "series name '{}' is already in use",
                entry.name
            )));
        }
        self.entries.push(entry);
        Ok(self)
    }

    pub fn entries(&self) -> &[PieEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&PieEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PieEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PieSeries {
    type Item = &'a PieEntry;
    type IntoIter = std::slice::Iter<'a, PieEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
