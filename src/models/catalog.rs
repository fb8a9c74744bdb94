//! Domain records for the admission catalog.
//!
//! All persistent entities are loaded once from the dataset provider and
//! are immutable for the process lifetime. Derived view structures borrow
//! from these records rather than copying them.

use crate::api::{DeptCode, UniversityId};
use serde::{Deserialize, Serialize};

/// Admission pathway that partitions [`AdmissionInfo`] records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// 繁星推薦, merit/star recommendation
    #[serde(rename = "繁星推薦")]
    Star,
    /// 個人申請, individual application
    #[serde(rename = "個人申請")]
    Personal,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Star => "繁星推薦",
            Channel::Personal => "個人申請",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Academic track classification of a department (類組).
///
/// Declaration order is the fixed display precedence, so the derived `Ord`
/// is the sort key for the grouped department listing.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ExamGroup {
    #[serde(rename = "一")]
    One,
    #[serde(rename = "二")]
    Two,
    #[serde(rename = "三")]
    Three,
}

impl ExamGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ExamGroup::One => "一",
            ExamGroup::Two => "二",
            ExamGroup::Three => "三",
        }
    }
}

impl std::fmt::Display for ExamGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Public/private classification of a university.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolType {
    #[serde(rename = "國立")]
    Public,
    #[serde(rename = "私立")]
    Private,
}

impl SchoolType {
    pub fn label(&self) -> &'static str {
        match self {
            SchoolType::Public => "國立",
            SchoolType::Private => "私立",
        }
    }
}

impl std::fmt::Display for SchoolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Institution category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolCategory {
    #[serde(rename = "一般大學")]
    General,
    #[serde(rename = "科技大學")]
    Technology,
    #[serde(rename = "師範大學")]
    Normal,
    #[serde(rename = "醫學大學")]
    Medical,
}

/// Campus location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub district: String,
}

/// One subject requirement of the entrance exam (學測檢定標準).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRequirement {
    /// Subject name (e.g. 國文, 數學A)
    pub subject: String,
    /// Percentile-band code (頂/前/均/後/底) or an absolute letter grade
    pub standard: String,
    /// Minimum level in 級分; zero or negative means no threshold
    pub level: i32,
}

impl ExamRequirement {
    /// Whether a level threshold applies to this subject.
    pub fn has_level(&self) -> bool {
        self.level > 0
    }
}

/// One named cutoff value of an admission round.
///
/// The value is opaque text: cutoffs are sometimes composite or formatted
/// score strings, and no arithmetic is ever performed on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdValue {
    pub item: String,
    pub value: String,
}

/// Outcome of one admission-decision round (錄取輪次).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Number of candidates admitted in this round
    pub count: u32,
    /// Cutoff values, ordered by comparison index
    pub thresholds: Vec<ThresholdValue>,
}

impl RoundResult {
    /// Look up the cutoff value for a named criterion.
    ///
    /// Linear search; `None` when this round carries no value for the
    /// criterion (rendered as the no-data sentinel).
    pub fn threshold(&self, item: &str) -> Option<&str> {
        self.thresholds
            .iter()
            .find(|t| t.item == item)
            .map(|t| t.value.as_str())
    }
}

/// Merit-recommendation admission record (繁星推薦).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarAdmission {
    /// Academic year (學年度)
    pub year: u16,
    /// Admission code for this offering
    pub dept_code: String,
    /// Admitted seats (招生名額)
    pub quota: u32,
    /// Exam requirements, in display order
    #[serde(default)]
    pub requirements: Vec<ExamRequirement>,
    /// Ordered tie-break criteria names; defines the cutoff-table columns
    #[serde(default)]
    pub comparison_order: Vec<String>,
    /// Free-text outcome summary
    #[serde(default)]
    pub result: String,
    /// First-round result; absent when the round did not occur or no data
    #[serde(default)]
    pub round1: Option<RoundResult>,
    /// Second-round result
    #[serde(default)]
    pub round2: Option<RoundResult>,
}

/// Individual-application admission record (個人申請).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalAdmission {
    pub year: u16,
    pub dept_code: String,
    pub quota: u32,
    #[serde(default)]
    pub requirements: Vec<ExamRequirement>,
    /// Second-stage screening multiplier (篩選倍率)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screening_multiplier: Option<f64>,
    /// Second-stage evaluation items (甄試項目)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_stage_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Admission record, tagged by channel.
///
/// Exactly one variant is present per record; the channel tag determines
/// which fields are meaningful. Consumption sites match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel")]
pub enum AdmissionInfo {
    #[serde(rename = "繁星推薦")]
    Star(StarAdmission),
    #[serde(rename = "個人申請")]
    Personal(PersonalAdmission),
}

impl AdmissionInfo {
    pub fn channel(&self) -> Channel {
        match self {
            AdmissionInfo::Star(_) => Channel::Star,
            AdmissionInfo::Personal(_) => Channel::Personal,
        }
    }

    pub fn year(&self) -> u16 {
        match self {
            AdmissionInfo::Star(a) => a.year,
            AdmissionInfo::Personal(a) => a.year,
        }
    }

    pub fn quota(&self) -> u32 {
        match self {
            AdmissionInfo::Star(a) => a.quota,
            AdmissionInfo::Personal(a) => a.quota,
        }
    }

    pub fn requirements(&self) -> &[ExamRequirement] {
        match self {
            AdmissionInfo::Star(a) => &a.requirements,
            AdmissionInfo::Personal(a) => &a.requirements,
        }
    }

    pub fn as_star(&self) -> Option<&StarAdmission> {
        match self {
            AdmissionInfo::Star(a) => Some(a),
            AdmissionInfo::Personal(_) => None,
        }
    }

    pub fn as_personal(&self) -> Option<&PersonalAdmission> {
        match self {
            AdmissionInfo::Star(_) => None,
            AdmissionInfo::Personal(a) => Some(a),
        }
    }
}

/// A department offering, owned by a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Concrete admission code, unique within the owning university
    pub id: DeptCode,
    /// Full department name as published by the school
    pub name: String,
    /// Cross-university identity label: departments sharing this name are
    /// merged as "the same program" in by-department browsing
    pub group_name: String,
    /// Exam group (類組)
    pub group: ExamGroup,
    /// Admission records, one per channel per year
    #[serde(default)]
    pub admissions: Vec<AdmissionInfo>,
}

impl Department {
    /// Whether this department has at least one record for `channel`.
    pub fn offers(&self, channel: Channel) -> bool {
        self.admissions.iter().any(|a| a.channel() == channel)
    }

    /// Admission records matching `channel`, in source order.
    pub fn admissions_for(&self, channel: Channel) -> impl Iterator<Item = &AdmissionInfo> {
        self.admissions
            .iter()
            .filter(move |a| a.channel() == channel)
    }

    /// Sum of `quota` over every record matching `channel`.
    pub fn quota_for(&self, channel: Channel) -> u32 {
        self.admissions_for(channel).map(|a| a.quota()).sum()
    }
}

/// A university with its ordered department offerings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    /// Official full name
    pub name: String,
    /// Common abbreviation (e.g. 台大)
    pub short_name: String,
    /// Externally recognized admission-code prefix
    pub code: String,
    /// Public/private classification
    #[serde(rename = "type")]
    pub school_type: SchoolType,
    pub category: SchoolCategory,
    pub location: Location,
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// Top-level catalog: the dataset provider's stored unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Dataset name
    #[serde(default)]
    pub name: String,
    /// SHA-256 checksum of the source JSON; doubles as the dataset version
    #[serde(default)]
    pub checksum: String,
    /// Ordered university collection
    pub universities: Vec<University>,
}

impl Catalog {
    /// Find a university by id.
    pub fn find_university(&self, id: &UniversityId) -> Option<&University> {
        self.universities.iter().find(|u| &u.id == id)
    }

    /// Resolve a (university, department) pair by id and admission code.
    pub fn department(
        &self,
        university: &UniversityId,
        code: &DeptCode,
    ) -> Option<(&University, &Department)> {
        let uni = self.find_university(university)?;
        let dept = uni.departments.iter().find(|d| &d.id == code)?;
        Some((uni, dept))
    }

    /// Distinct city names across the dataset, deduplicated in first-seen
    /// dataset order.
    pub fn distinct_cities(&self) -> Vec<String> {
        let mut cities = Vec::new();
        for university in &self.universities {
            if !cities.contains(&university.location.city) {
                cities.push(university.location.city.clone());
            }
        }
        cities
    }
}
