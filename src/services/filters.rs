use crate::models::{ExamGroup, SchoolType};
use crate::views::eligibility::Program;
use serde::{Deserialize, Serialize};

/// Active filter constraints over the flat projection.
///
/// Each field individually empty means "no constraint"; active
/// constraints combine with logical AND. The struct is the session's
/// filter state and a component of the derivation key, so it is cheap to
/// clone and compare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSet {
    /// Free-text query; empty or whitespace-only means no text filter
    pub query: String,
    /// Exact match on university city
    pub city: Option<String>,
    /// Exact match on public/private classification
    pub school_type: Option<SchoolType>,
    /// Exact match on department exam group
    pub exam_group: Option<ExamGroup>,
}

impl FilterSet {
    /// Whether any constraint is active.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.city.is_some()
            || self.school_type.is_some()
            || self.exam_group.is_some()
    }

    /// Reset every field to its unconstrained state. Callers observe the
    /// reset as a single state change.
    pub fn clear(&mut self) {
        *self = FilterSet::default();
    }

    /// Query normalized for matching and for derivation-key equality:
    /// trimmed and lowercased, so queries differing only in case or
    /// surrounding whitespace derive identical views.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Whether one projection pair satisfies every active constraint.
    pub fn matches(&self, program: &Program<'_>) -> bool {
        satisfies(program, &self.normalized_query(), self)
    }
}

fn satisfies(program: &Program<'_>, query: &str, filters: &FilterSet) -> bool {
    (query.is_empty() || matches_query(program, query))
        && filters
            .city
            .as_ref()
            .map_or(true, |city| &program.university.location.city == city)
        && filters
            .school_type
            .map_or(true, |t| program.university.school_type == t)
        && filters
            .exam_group
            .map_or(true, |g| program.department.group == g)
}

/// Case-insensitive substring match against any of: university full name,
/// university short name, department name, department group name,
/// department code. Matching any one field qualifies the pair.
fn matches_query(program: &Program<'_>, query: &str) -> bool {
    let Program {
        university,
        department,
    } = program;

    university.name.to_lowercase().contains(query)
        || university.short_name.to_lowercase().contains(query)
        || department.name.to_lowercase().contains(query)
        || department.group_name.to_lowercase().contains(query)
        || department.id.as_str().to_lowercase().contains(query)
}

/// Apply the filter pipeline to the flat projection, keeping relative
/// order. With no active constraint the result equals the input.
pub fn apply_filters<'a>(programs: &[Program<'a>], filters: &FilterSet) -> Vec<Program<'a>> {
    if !filters.is_active() {
        return programs.to_vec();
    }

    // Normalize the query once, not per pair.
    let query = filters.normalized_query();
    programs
        .iter()
        .filter(|program| satisfies(program, &query, filters))
        .copied()
        .collect()
}
