//! Year model

use super::module::Module;
use super::{coerce, find_index};
use serde::{Deserialize, Serialize};

/// An academic year contributing `weighting` percent to the degree result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Year {
    /// Unique, immutable identifier
    #[serde(deserialize_with = "coerce::id")]
    pub id: u64,

    /// Display name (e.g., "Year 2")
    #[serde(default)]
    pub name: String,

    /// Percentage contribution to the overall degree average
    #[serde(default, deserialize_with = "coerce::f64_or_zero")]
    pub weighting: f64,

    /// Modules in entry order
    #[serde(default)]
    pub modules: Vec<Module>,

    /// Display-only flag; never read by the grade engine
    #[serde(default)]
    pub collapsed: bool,
}

impl Year {
    /// Create an empty, expanded year
    #[must_use]
    pub const fn new(id: u64, name: String, weighting: f64) -> Self {
        Self {
            id,
            name,
            weighting,
            modules: Vec::new(),
            collapsed: false,
        }
    }

    /// Look up a module by id or name
    #[must_use]
    pub fn module(&self, selector: &str) -> Option<&Module> {
        find_index(&self.modules, selector, |m| (m.id, m.name.as_str())).map(|idx| &self.modules[idx])
    }

    /// Mutable lookup by id or name
    pub fn module_mut(&mut self, selector: &str) -> Option<&mut Module> {
        let idx = find_index(&self.modules, selector, |m| (m.id, m.name.as_str()))?;
        self.modules.get_mut(idx)
    }

    /// Remove a module by id or name, returning it
    pub fn remove_module(&mut self, selector: &str) -> Option<Module> {
        find_index(&self.modules, selector, |m| (m.id, m.name.as_str()))
            .map(|idx| self.modules.remove(idx))
    }

    /// Sum of positive module credits
    #[must_use]
    pub fn total_ects(&self) -> f64 {
        self.modules
            .iter()
            .map(|m| m.ects)
            .filter(|e| e.is_finite() && *e > 0.0)
            .sum()
    }
}
