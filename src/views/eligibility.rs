use crate::models::{Department, University};
use serde::Serialize;

// =========================================================
// Flat eligibility projection types
// =========================================================

/// One (university, department) pair from the flat eligibility
/// projection: the department offers at least one admission record for
/// the active channel.
///
/// Pairs are shared read-only references into the catalog, never copies.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Program<'a> {
    pub university: &'a University,
    pub department: &'a Department,
}
