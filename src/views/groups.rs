use crate::api::DeptCode;
use crate::models::{Department, ExamGroup, University};
use serde::Serialize;

// =========================================================
// Browse-by-department types (cross-university merge)
// =========================================================

/// One university's departments under a merged department group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupEntry<'a> {
    pub university: &'a University,
    pub departments: Vec<&'a Department>,
}

/// Departments merged across universities by shared group name.
///
/// The exam group is representative: it is taken from the first
/// department encountered under the group name and not verified against
/// later members.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentGroup<'a> {
    pub group_name: &'a str,
    pub group: ExamGroup,
    pub entries: Vec<GroupEntry<'a>>,
    /// Sum of quota over every admission record matching the active
    /// channel across every department in this group
    pub total_quota: u32,
}

impl<'a> DepartmentGroup<'a> {
    /// Distinct admission codes under this group, sorted lexicographically.
    pub fn department_codes(&self) -> Vec<&'a DeptCode> {
        let mut codes: Vec<&DeptCode> = self
            .entries
            .iter()
            .flat_map(|e| e.departments.iter().map(|d| &d.id))
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }

    /// Display code for the group listing: a single distinct code is shown
    /// verbatim, multiple codes collapse to `first~last`.
    ///
    /// The collapsed form is a lexicographic min~max, not a true range:
    /// non-adjacent codes render as if contiguous. Existing behavior,
    /// preserved deliberately.
    pub fn code_display(&self) -> String {
        let codes = self.department_codes();
        match codes.as_slice() {
            [] => String::new(),
            [only] => only.to_string(),
            [first, .., last] => format!("{}~{}", first, last),
        }
    }

    /// Total number of concrete department offerings merged into this
    /// group, shown as "(N 組)" when greater than one.
    pub fn sub_department_count(&self) -> usize {
        self.entries.iter().map(|e| e.departments.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UniversityId;
    use crate::models::{Location, SchoolCategory, SchoolType};

    fn test_university(id: &str) -> University {
        University {
            id: UniversityId::new(id),
            name: id.to_string(),
            short_name: id.to_string(),
            code: "001".to_string(),
            school_type: SchoolType::Public,
            category: SchoolCategory::General,
            location: Location {
                city: "台北市".to_string(),
                district: "大安區".to_string(),
            },
            departments: vec![],
        }
    }

    fn test_department(code: &str) -> Department {
        Department {
            id: DeptCode::new(code),
            name: "資訊工程學系".to_string(),
            group_name: "資訊工程學系".to_string(),
            group: ExamGroup::Two,
            admissions: vec![],
        }
    }

    #[test]
    fn test_code_display_single() {
        let uni = test_university("a");
        let dept = test_department("007");
        let group = DepartmentGroup {
            group_name: "資訊工程學系",
            group: ExamGroup::Two,
            entries: vec![GroupEntry {
                university: &uni,
                departments: vec![&dept],
            }],
            total_quota: 0,
        };
        assert_eq!(group.code_display(), "007");
    }

    #[test]
    fn test_code_display_collapses_to_range() {
        let uni_a = test_university("a");
        let uni_b = test_university("b");
        let d1 = test_department("003");
        let d2 = test_department("001");
        let group = DepartmentGroup {
            group_name: "資訊工程學系",
            group: ExamGroup::Two,
            entries: vec![
                GroupEntry {
                    university: &uni_a,
                    departments: vec![&d1],
                },
                GroupEntry {
                    university: &uni_b,
                    departments: vec![&d2],
                },
            ],
            total_quota: 0,
        };
        // Lexicographic min~max even though 002 is not a member.
        assert_eq!(group.code_display(), "001~003");
        assert_eq!(group.sub_department_count(), 2);
    }

    #[test]
    fn test_code_display_duplicate_codes_stay_verbatim() {
        let uni_a = test_university("a");
        let uni_b = test_university("b");
        let d1 = test_department("007");
        let d2 = test_department("007");
        let group = DepartmentGroup {
            group_name: "資訊工程學系",
            group: ExamGroup::Two,
            entries: vec![
                GroupEntry {
                    university: &uni_a,
                    departments: vec![&d1],
                },
                GroupEntry {
                    university: &uni_b,
                    departments: vec![&d2],
                },
            ],
            total_quota: 0,
        };
        // One distinct code across two universities: no tilde.
        assert_eq!(group.code_display(), "007");
    }

    #[test]
    fn test_code_display_empty_group() {
        let group = DepartmentGroup {
            group_name: "資訊工程學系",
            group: ExamGroup::Two,
            entries: vec![],
            total_quota: 0,
        };
        assert_eq!(group.code_display(), "");
    }
}
