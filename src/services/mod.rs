//! Service layer: the aggregation engine.
//!
//! Pure, total derivation functions over the immutable catalog. Every
//! function here is synchronous, never fails, and is re-executed fully on
//! each qualifying state change; no partial or incremental recomputation
//! exists. Failed lookups degrade to empty results, never errors.

pub mod detail;

pub mod filters;

pub mod grouping;

pub mod projection;


pub use detail::{resolve_detail, year_blocks};
pub use filters::{apply_filters, FilterSet};
pub use grouping::{group_by_department_name, group_by_school};
pub use projection::eligible_programs;
