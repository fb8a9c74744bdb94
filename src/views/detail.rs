use crate::views::groups::{DepartmentGroup, GroupEntry};
use crate::models::{AdmissionInfo, Department, ExamGroup, University};
use serde::Serialize;

// =========================================================
// Drill-down detail types
// =========================================================

/// All admission records of one academic year for a department. A year
/// may legitimately hold more than one record (distinct sub-offers), each
/// rendered as its own block.
#[derive(Debug, Clone, Serialize)]
pub struct YearBlock<'a> {
    pub year: u16,
    /// Matching records in source order
    pub records: Vec<&'a AdmissionInfo>,
    /// Set on the most recent block only; drives the "current year"
    /// highlight
    pub current: bool,
}

/// Resolved target of the detail page: either one concrete department at
/// one university, or a cross-university merged group.
#[derive(Debug, Clone, Serialize)]
pub enum DetailView<'a> {
    Single {
        university: &'a University,
        department: &'a Department,
    },
    Grouped(DepartmentGroup<'a>),
}

impl<'a> DetailView<'a> {
    /// Heading shown on the detail page.
    pub fn title(&self) -> &'a str {
        match self {
            DetailView::Single { department, .. } => &department.name,
            DetailView::Grouped(group) => group.group_name,
        }
    }

    pub fn exam_group(&self) -> ExamGroup {
        match self {
            DetailView::Single { department, .. } => department.group,
            DetailView::Grouped(group) => group.group,
        }
    }

    /// Uniform per-university entry list: a single department detail is a
    /// one-entry list, so both shapes render through the same path.
    pub fn entries(&self) -> Vec<GroupEntry<'a>> {
        match self {
            DetailView::Single {
                university,
                department,
            } => vec![GroupEntry {
                university,
                departments: vec![department],
            }],
            DetailView::Grouped(group) => group.entries.clone(),
        }
    }
}
