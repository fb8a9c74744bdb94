use crate::models::{Department, University};
use serde::Serialize;

// =========================================================
// Browse-by-school types
// =========================================================

/// One qualifying university with its matching departments, in first-seen
/// order of the filtered projection.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolGroup<'a> {
    pub university: &'a University,
    pub departments: Vec<&'a Department>,
}

impl<'a> SchoolGroup<'a> {
    /// Count of matching departments, shown on the school card.
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Departments sorted lexicographically by admission code, the order
    /// used by the school drill-down listing.
    pub fn sorted_departments(&self) -> Vec<&'a Department> {
        let mut sorted = self.departments.clone();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        sorted
    }
}
