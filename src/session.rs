//! View-state controller.
//!
//! [`BrowseSession`] owns the navigation and filter state of one browsing
//! session; [`ViewBundle`] is the set of derived views recomputed from an
//! immutable catalog for the current state. State mutation and view
//! derivation are deliberately separate so every derived view stays a
//! pure function of (catalog, channel, filters).

use crate::api::{DeptCode, UniversityId};
use crate::models::{Catalog, Channel, ExamGroup, SchoolType};
use crate::services::{
    apply_filters, eligible_programs, group_by_department_name, group_by_school, resolve_detail,
    FilterSet,
};
use crate::views::detail::DetailView;
use crate::views::eligibility::Program;
use crate::views::groups::DepartmentGroup;
use crate::views::schools::SchoolGroup;
use serde::{Deserialize, Serialize};

/// Top-level presentation of the browse list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrowseMode {
    /// One section per university
    #[default]
    BySchool,
    /// Departments merged across universities by group name
    ByDepartment,
}

/// Persistent identifier of a drill-down target. Stored as ids rather
/// than references so a stale selection can outlive a dataset or filter
/// change and simply fail to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DetailSelection {
    Single {
        university: UniversityId,
        department: DeptCode,
    },
    Grouped {
        group_name: String,
    },
}

/// Memoization key for one full view derivation.
///
/// Two equal keys are guaranteed to derive identical views, so a caller
/// may cache a [`ViewBundle`]'s serialized form keyed by this value. The
/// query component is normalized; correctness never depends on caching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeriveKey {
    pub channel: Channel,
    pub query: String,
    pub city: Option<String>,
    pub school_type: Option<SchoolType>,
    pub exam_group: Option<ExamGroup>,
    /// Checksum identity of the dataset the views were derived from
    pub dataset_version: String,
}

impl DeriveKey {
    pub fn new(channel: Channel, filters: &FilterSet, dataset_version: &str) -> Self {
        DeriveKey {
            channel,
            query: filters.normalized_query(),
            city: filters.city.clone(),
            school_type: filters.school_type,
            exam_group: filters.exam_group,
            dataset_version: dataset_version.to_string(),
        }
    }
}

/// Every derived view for one (catalog, channel, filters) triple.
///
/// Borrows from the catalog; recomputed wholesale on any qualifying state
/// change. The unfiltered projection is kept alongside the filtered one
/// because the empty-state logic needs to distinguish "nothing offered"
/// from "everything filtered out".
#[derive(Debug, Clone, Serialize)]
pub struct ViewBundle<'a> {
    /// Full eligibility projection, before filtering
    pub programs: Vec<Program<'a>>,
    /// Projection after the filter pipeline
    pub filtered: Vec<Program<'a>>,
    /// Filtered projection regrouped by university
    pub schools: Vec<SchoolGroup<'a>>,
    /// Filtered projection merged by department group name
    pub department_groups: Vec<DepartmentGroup<'a>>,
}

impl<'a> ViewBundle<'a> {
    pub fn derive(catalog: &'a Catalog, channel: Channel, filters: &FilterSet) -> Self {
        let programs = eligible_programs(catalog, channel);
        let filtered = apply_filters(&programs, filters);
        let schools = group_by_school(&filtered);
        let department_groups = group_by_department_name(&filtered, channel);
        ViewBundle {
            programs,
            filtered,
            schools,
            department_groups,
        }
    }

    /// Whether the filtered listing is empty.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn school(&self, id: &UniversityId) -> Option<&SchoolGroup<'a>> {
        self.schools.iter().find(|s| &s.university.id == id)
    }
}

/// Mutable state of one browsing session.
///
/// Holds only ids and filter values, never catalog references, so the
/// session survives a dataset swap. Derived views are obtained through
/// [`BrowseSession::views`] against whatever catalog is current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseSession {
    channel: Channel,
    browse_mode: BrowseMode,
    filters: FilterSet,
    selected_school: Option<UniversityId>,
    detail: Option<DetailSelection>,
}

impl Default for BrowseSession {
    fn default() -> Self {
        BrowseSession {
            channel: Channel::Star,
            browse_mode: BrowseMode::BySchool,
            filters: FilterSet::default(),
            selected_school: None,
            detail: None,
        }
    }
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn browse_mode(&self) -> BrowseMode {
        self.browse_mode
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn selected_school(&self) -> Option<&UniversityId> {
        self.selected_school.as_ref()
    }

    pub fn detail(&self) -> Option<&DetailSelection> {
        self.detail.as_ref()
    }

    /// Switch admission channel. The drill-down context belongs to the
    /// previous channel's views, so it is discarded; filters persist.
    pub fn set_channel(&mut self, channel: Channel) {
        if self.channel != channel {
            self.channel = channel;
            self.selected_school = None;
            self.detail = None;
            log::debug!("Channel switched to {}", channel);
        }
    }

    /// Switch list presentation. The school drill-down only exists in
    /// by-school mode and the open detail page may not exist in the new
    /// mode, so both are cleared.
    pub fn set_browse_mode(&mut self, mode: BrowseMode) {
        if self.browse_mode != mode {
            self.browse_mode = mode;
            self.selected_school = None;
            self.detail = None;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.filters.city = city;
    }

    pub fn set_school_type(&mut self, school_type: Option<SchoolType>) {
        self.filters.school_type = school_type;
    }

    pub fn set_exam_group(&mut self, exam_group: Option<ExamGroup>) {
        self.filters.exam_group = exam_group;
    }

    /// Reset every filter in one step.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    pub fn select_school(&mut self, id: Option<UniversityId>) {
        self.selected_school = id;
    }

    pub fn open_detail(&mut self, selection: DetailSelection) {
        self.detail = Some(selection);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Memoization key for the views this state would derive from the
    /// dataset identified by `dataset_version`.
    pub fn derive_key(&self, dataset_version: &str) -> DeriveKey {
        DeriveKey::new(self.channel, &self.filters, dataset_version)
    }

    /// Derive every view for the current state from `catalog`.
    pub fn views<'a>(&self, catalog: &'a Catalog) -> ViewBundle<'a> {
        ViewBundle::derive(catalog, self.channel, &self.filters)
    }

    /// The drilled-into school's section, if the selection still resolves
    /// under the current filters.
    pub fn selected_school_view<'a, 'b>(
        &self,
        bundle: &'b ViewBundle<'a>,
    ) -> Option<&'b SchoolGroup<'a>> {
        self.selected_school.as_ref().and_then(|id| bundle.school(id))
    }

    /// Resolve the open detail page, if any, against the current catalog
    /// and views. A stale selection degrades to `None`.
    pub fn detail_view<'a>(
        &self,
        catalog: &'a Catalog,
        bundle: &ViewBundle<'a>,
    ) -> Option<DetailView<'a>> {
        let selection = self.detail.as_ref()?;
        resolve_detail(catalog, &bundle.department_groups, selection)
    }
}
