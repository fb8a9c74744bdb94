//! Public API surface for the admission catalog engine.
//!
//! This file consolidates the identifier newtypes and re-exports the
//! derived-view DTO types. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::services::filters::FilterSet;
pub use crate::session::BrowseMode;
pub use crate::session::BrowseSession;
pub use crate::session::DeriveKey;
pub use crate::session::DetailSelection;
pub use crate::session::ViewBundle;
pub use crate::views::detail::DetailView;
pub use crate::views::detail::YearBlock;
pub use crate::views::eligibility::Program;
pub use crate::views::groups::DepartmentGroup;
pub use crate::views::groups::GroupEntry;
pub use crate::views::results::ResultTable;
pub use crate::views::results::RoundRow;
pub use crate::views::results::NO_DATA;
pub use crate::views::schools::SchoolGroup;

use serde::{Deserialize, Serialize};

/// University identifier (globally unique across the catalog).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniversityId(pub String);

/// Department identifier: the concrete admission code, unique within its
/// owning university. Lexicographic ordering on the code is the display
/// ordering used throughout the views.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeptCode(pub String);

impl UniversityId {
    pub fn new(value: impl Into<String>) -> Self {
        UniversityId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DeptCode {
    pub fn new(value: impl Into<String>) -> Self {
        DeptCode(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UniversityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for DeptCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UniversityId {
    fn from(value: &str) -> Self {
        UniversityId(value.to_string())
    }
}
impl From<&str> for DeptCode {
    fn from(value: &str) -> Self {
        DeptCode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{DeptCode, UniversityId};

    #[test]
    fn test_university_id_new() {
        let id = UniversityId::new("ntu");
        assert_eq!(id.as_str(), "ntu");
    }

    #[test]
    fn test_university_id_equality() {
        let id1 = UniversityId::new("ntu");
        let id2 = UniversityId::new("ntu");
        let id3 = UniversityId::new("nthu");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_dept_code_ordering() {
        let a = DeptCode::new("001012");
        let b = DeptCode::new("001013");

        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_dept_code_display() {
        let code = DeptCode::new("004022");
        assert_eq!(code.to_string(), "004022");
    }

    #[test]
    fn test_ids_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(UniversityId::new("ntu"));
        set.insert(UniversityId::new("nthu"));
        set.insert(UniversityId::new("ntu")); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = UniversityId::new("ncku");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ncku\"");
        let back: UniversityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
