use crate::models::{Catalog, Channel, Department};
use crate::session::DetailSelection;
use crate::views::detail::{DetailView, YearBlock};
use crate::views::groups::DepartmentGroup;

/// Year-stacked admission history for one department and channel.
///
/// Years are ordered newest first; a year with several records keeps them
/// all, in source order. No records for the channel yields an empty list.
pub fn year_blocks(department: &Department, channel: Channel) -> Vec<YearBlock<'_>> {
    let mut years: Vec<u16> = department
        .admissions_for(channel)
        .map(|a| a.year())
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    years
        .into_iter()
        .enumerate()
        .map(|(i, year)| YearBlock {
            year,
            records: department
                .admissions_for(channel)
                .filter(|a| a.year() == year)
                .collect(),
            current: i == 0,
        })
        .collect()
}

/// Resolve a drill-down selection against the current catalog and merged
/// groups. A selection that no longer points at anything, e.g. after the
/// dataset or filters changed underneath it, resolves to `None` rather
/// than an error.
pub fn resolve_detail<'a>(
    catalog: &'a Catalog,
    groups: &[DepartmentGroup<'a>],
    selection: &DetailSelection,
) -> Option<DetailView<'a>> {
    match selection {
        DetailSelection::Single {
            university,
            department,
        } => {
            let (uni, dept) = catalog.department(university, department)?;
            Some(DetailView::Single {
                university: uni,
                department: dept,
            })
        }
        DetailSelection::Grouped { group_name } => groups
            .iter()
            .find(|g| g.group_name == group_name.as_str())
            .cloned()
            .map(DetailView::Grouped),
    }
}
