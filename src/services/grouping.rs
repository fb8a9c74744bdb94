use crate::models::Channel;
use crate::views::eligibility::Program;
use crate::views::groups::{DepartmentGroup, GroupEntry};
use crate::views::schools::SchoolGroup;
use std::collections::HashMap;

/// Regroup the filtered projection by university.
///
/// Universities appear in first-occurrence order and each keeps its
/// departments in projection order, deduplicated by department code. A
/// university whose departments were all filtered out has no group.
pub fn group_by_school<'a>(programs: &[Program<'a>]) -> Vec<SchoolGroup<'a>> {
    let mut groups: Vec<SchoolGroup<'a>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for program in programs {
        let slot = *index
            .entry(program.university.id.as_str())
            .or_insert_with(|| {
                groups.push(SchoolGroup {
                    university: program.university,
                    departments: Vec::new(),
                });
                groups.len() - 1
            });

        let group = &mut groups[slot];
        if !group
            .departments
            .iter()
            .any(|d| d.id == program.department.id)
        {
            group.departments.push(program.department);
        }
    }

    groups
}

/// Merge the filtered projection across universities by department group
/// name.
///
/// Groups are ordered by exam group precedence (一 before 二 before 三),
/// ties keeping first-occurrence order; a group's exam group is taken
/// from its first member. Inside a group, per-university entries and
/// their departments follow projection order. `total_quota` sums quota
/// over every record of every member department matching `channel`.
pub fn group_by_department_name<'a>(
    programs: &[Program<'a>],
    channel: Channel,
) -> Vec<DepartmentGroup<'a>> {
    let mut groups: Vec<DepartmentGroup<'a>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for program in programs {
        let slot = *index
            .entry(program.department.group_name.as_str())
            .or_insert_with(|| {
                groups.push(DepartmentGroup {
                    group_name: &program.department.group_name,
                    group: program.department.group,
                    entries: Vec::new(),
                    total_quota: 0,
                });
                groups.len() - 1
            });

        let group = &mut groups[slot];
        let entry_at = group
            .entries
            .iter()
            .position(|e| e.university.id == program.university.id);
        let entry = match entry_at {
            Some(at) => &mut group.entries[at],
            None => {
                group.entries.push(GroupEntry {
                    university: program.university,
                    departments: Vec::new(),
                });
                group.entries.last_mut().unwrap()
            }
        };

        if !entry.departments.iter().any(|d| d.id == program.department.id) {
            entry.departments.push(program.department);
            group.total_quota += program.department.quota_for(channel);
        }
    }

    // Stable, so insertion order breaks ties within an exam group.
    groups.sort_by_key(|g| g.group);

    log::debug!(
        "Merged {} programs into {} department groups",
        programs.len(),
        groups.len()
    );
    groups
}
