//! Display names for area identifiers.

use std::collections::BTreeMap;

use spei_table::AreaId;

/// Maps each area identifier to the human-readable name from the first
/// header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaLabels {
    names: BTreeMap<AreaId, String>,
}

impl AreaLabels {
    /// Creates an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` for `area`, replacing any earlier name.
    pub fn insert(&mut self, area: AreaId, name: impl Into<String>) {
        self.names.insert(area, name.into());
    }

    /// Display name for `area`, if one was recorded.
    pub fn get(&self, area: &AreaId) -> Option<&str> {
        self.names.get(area).map(String::as_str)
    }

    /// Display name for `area`, or its identifier when none was recorded
    /// or the recorded name is blank.
    pub fn display_name<'a>(&'a self, area: &'a AreaId) -> &'a str {
        match self.get(area) {
            Some(name) if !name.is_empty() => name,
            _ => area.as_str(),
        }
    }

    /// Number of labelled areas.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no area is labelled.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(AreaId, String)> for AreaLabels {
    fn from_iter<I: IntoIterator<Item = (AreaId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
