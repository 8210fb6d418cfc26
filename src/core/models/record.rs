//! Academic record: the root of the years → modules → assessments tree

use super::{find_index, Assessment, Module, Year};
use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ordered sequence of years. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcademicRecord {
    /// Years in entry order
    pub years: Vec<Year>,
}

impl AcademicRecord {
    /// Create an empty record
    #[must_use]
    pub const fn new() -> Self {
        Self { years: Vec::new() }
    }

    /// Whether the record holds no years
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Next free identifier.
    ///
    /// Ids are shared across years, modules and assessments so an id alone
    /// names one entity.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` when the highest id is already `u64::MAX`.
    pub fn next_id(&self) -> Result<u64> {
        let max_year = self.years.iter().map(|y| y.id);
        let max_module = self.years.iter().flat_map(|y| &y.modules).map(|m| m.id);
        let max_assessment = self
            .years
            .iter()
            .flat_map(|y| &y.modules)
            .flat_map(|m| &m.assessments)
            .map(|a| a.id);
        max_year
            .chain(max_module)
            .chain(max_assessment)
            .max()
            .map_or(Some(1), |id| id.checked_add(1))
            .ok_or_else(|| Error::InvalidInput("no identifiers left in this record".to_string()))
    }

    /// Look up a year by id or name
    ///
    /// # Errors
    /// Returns `Error::NotFound` when nothing matches.
    pub fn year(&self, selector: &str) -> Result<&Year> {
        find_index(&self.years, selector, |y| (y.id, y.name.as_str()))
            .map(|idx| &self.years[idx])
            .ok_or_else(|| not_found("year", selector))
    }

    /// Mutable lookup by id or name
    ///
    /// # Errors
    /// Returns `Error::NotFound` when nothing matches.
    pub fn year_mut(&mut self, selector: &str) -> Result<&mut Year> {
        let idx = find_index(&self.years, selector, |y| (y.id, y.name.as_str()))
            .ok_or_else(|| not_found("year", selector))?;
        Ok(&mut self.years[idx])
    }

    /// Look up a module inside a year
    ///
    /// # Errors
    /// Returns `Error::NotFound` when either selector matches nothing.
    pub fn module(&self, year: &str, module: &str) -> Result<&Module> {
        self.year(year)?
            .module(module)
            .ok_or_else(|| not_found("module", module))
    }

    /// Mutable module lookup
    ///
    /// # Errors
    /// Returns `Error::NotFound` when either selector matches nothing.
    pub fn module_mut(&mut self, year: &str, module: &str) -> Result<&mut Module> {
        self.year_mut(year)?
            .module_mut(module)
            .ok_or_else(|| not_found("module", module))
    }

    /// Mutable assessment lookup
    ///
    /// # Errors
    /// Returns `Error::NotFound` when any selector matches nothing.
    pub fn assessment_mut(
        &mut self,
        year: &str,
        module: &str,
        assessment: &str,
    ) -> Result<&mut Assessment> {
        self.module_mut(year, module)?
            .assessment_mut(assessment)
            .ok_or_else(|| not_found("assessment", assessment))
    }

    /// Append a new year and return its id
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` when no id is left to allocate.
    pub fn add_year(&mut self, name: String, weighting: f64) -> Result<u64> {
        let id = self.next_id()?;
        self.years.push(Year::new(id, name, weighting));
        Ok(id)
    }

    /// Remove a year and everything in it
    ///
    /// # Errors
    /// Returns `Error::NotFound` when nothing matches.
    pub fn remove_year(&mut self, selector: &str) -> Result<Year> {
        let idx = find_index(&self.years, selector, |y| (y.id, y.name.as_str()))
            .ok_or_else(|| not_found("year", selector))?;
        Ok(self.years.remove(idx))
    }

    /// Append a new module to a year and return its id
    ///
    /// # Errors
    /// Returns `Error::NotFound` when the year does not exist and
    /// `Error::InvalidInput` when no id is left to allocate.
    pub fn add_module(&mut self, year: &str, name: String, ects: f64) -> Result<u64> {
        let id = self.next_id()?;
        self.year_mut(year)?.modules.push(Module::new(id, name, ects));
        Ok(id)
    }

    /// Remove a module from a year
    ///
    /// # Errors
    /// Returns `Error::NotFound` when either selector matches nothing.
    pub fn remove_module(&mut self, year: &str, module: &str) -> Result<Module> {
        self.year_mut(year)?
            .remove_module(module)
            .ok_or_else(|| not_found("module", module))
    }

    /// Append an assessment to a module and return its id.
    ///
    /// The id carried by `draft` is replaced with a fresh one.
    ///
    /// # Errors
    /// Returns `Error::NotFound` when either selector matches nothing and
    /// `Error::InvalidInput` when no id is left to allocate.
    pub fn add_assessment(&mut self, year: &str, module: &str, draft: Assessment) -> Result<u64> {
        let id = self.next_id()?;
        self.module_mut(year, module)?
            .assessments
            .push(Assessment { id, ..draft });
        Ok(id)
    }

    /// Remove an assessment from a module
    ///
    /// # Errors
    /// Returns `Error::NotFound` when any selector matches nothing.
    pub fn remove_assessment(
        &mut self,
        year: &str,
        module: &str,
        assessment: &str,
    ) -> Result<Assessment> {
        self.module_mut(year, module)?
            .remove_assessment(assessment)
            .ok_or_else(|| not_found("assessment", assessment))
    }

    /// Iterate every assessment together with its year and module
    pub fn assessments(&self) -> impl Iterator<Item = (&Year, &Module, &Assessment)> {
        self.years.iter().flat_map(|year| {
            year.modules.iter().flat_map(move |module| {
                module
                    .assessments
                    .iter()
                    .map(move |assessment| (year, module, assessment))
            })
        })
    }
}

fn not_found(kind: &'static str, selector: &str) -> Error {
    Error::NotFound {
        kind,
        selector: selector.to_string(),
    }
}
