//! Area identifiers and the ordered schema of area columns.

use std::collections::HashSet;
use std::fmt;

use crate::error::TableError;

/// Identifier of a hydrometric area.
///
/// Source files label areas with numeric codes or short strings; both are
/// kept in textual form so `"028"` and `"28"` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AreaId(String);

impl AreaId {
    /// Creates an identifier, trimming surrounding whitespace.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AreaId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Ordered, duplicate-free set of area columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AreaSchema {
    areas: Vec<AreaId>,
}

impl AreaSchema {
    /// Creates a schema, preserving the given column order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateArea`] if an identifier repeats.
    pub fn new(areas: Vec<AreaId>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(areas.len());
        for area in &areas {
            if !seen.insert(area) {
                return Err(TableError::DuplicateArea { area: area.clone() });
            }
        }
        Ok(Self { areas })
    }

    /// Number of areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns `true` if the schema has no areas.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Area identifiers in column order.
    pub fn areas(&self) -> &[AreaId] {
        &self.areas
    }

    /// Column index of `area`, if present.
    pub fn position(&self, area: &AreaId) -> Option<usize> {
        self.areas.iter().position(|a| a == area)
    }

    /// Returns `true` if `area` is one of the columns.
    pub fn contains(&self, area: &AreaId) -> bool {
        self.position(area).is_some()
    }

    /// Areas present in both schemas, in `self`'s column order.
    pub fn intersection(&self, other: &AreaSchema) -> AreaSchema {
        let areas = self
            .areas
            .iter()
            .filter(|a| other.contains(a))
            .cloned()
            .collect();
        AreaSchema { areas }
    }

    /// Areas of `self` that are absent from `other`.
    pub fn difference(&self, other: &AreaSchema) -> Vec<AreaId> {
        self.areas
            .iter()
            .filter(|a| !other.contains(a))
            .cloned()
            .collect()
    }
}
