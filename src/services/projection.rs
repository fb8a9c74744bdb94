use crate::models::{Catalog, Channel};
use crate::views::eligibility::Program;

/// Flat eligibility projection: every (university, department) pair where
/// the department has at least one admission record for `channel`.
///
/// Order follows dataset iteration order; no explicit sort. Total over
/// any catalog, returning an empty sequence when nothing matches.
pub fn eligible_programs(catalog: &Catalog, channel: Channel) -> Vec<Program<'_>> {
    let mut programs = Vec::new();
    for university in &catalog.universities {
        for department in &university.departments {
            if department.offers(channel) {
                programs.push(Program {
                    university,
                    department,
                });
            }
        }
    }

    log::debug!(
        "Eligibility projection for {}: {} programs",
        channel,
        programs.len()
    );
    programs
}
