use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::symptoms::{SeverityLevel, SymptomId};

/// Identifier wrapper for diseases in the knowledge catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiseaseId(pub String);

impl DiseaseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiseaseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Clinical severity classification of a disease itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseSeverity {
    Mild,
    Moderate,
    Severe,
    Emergency,
}

impl DiseaseSeverity {
    /// Symptom severity a presentation of this disease is expected to show.
    pub const fn expected_level(self) -> SeverityLevel {
        match self {
            DiseaseSeverity::Mild => SeverityLevel::Mild,
            DiseaseSeverity::Moderate => SeverityLevel::Moderate,
            DiseaseSeverity::Severe => SeverityLevel::Severe,
            DiseaseSeverity::Emergency => SeverityLevel::Critical,
        }
    }
}

/// How quickly the patient should seek care for this disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    SelfCare,
    ScheduleVisit,
    SeeSoon,
    Emergency,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Urgency::SelfCare => "self-care at home",
            Urgency::ScheduleVisit => "schedule a visit within 2-3 days",
            Urgency::SeeSoon => "see a clinician within 24 hours",
            Urgency::Emergency => "go to emergency services immediately",
        }
    }
}

/// Inclusive range of days a disease typically runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min_days: u32,
    pub max_days: u32,
}

impl DurationRange {
    pub const fn new(min_days: u32, max_days: u32) -> Self {
        Self { min_days, max_days }
    }

    pub fn contains(&self, days: f64) -> bool {
        days >= self.min_days as f64 && days <= self.max_days as f64
    }

    /// Distance in days from the nearest bound, 0.0 when inside the range.
    pub fn distance(&self, days: f64) -> f64 {
        if days < self.min_days as f64 {
            self.min_days as f64 - days
        } else if days > self.max_days as f64 {
            days - self.max_days as f64
        } else {
            0.0
        }
    }
}

/// Coarse disease domain keying the follow-up-test lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseCategory {
    Respiratory,
    Gastrointestinal,
    Neurological,
    Urinary,
    Ophthalmic,
}

impl DiseaseCategory {
    pub const fn label(self) -> &'static str {
        match self {
            DiseaseCategory::Respiratory => "respiratory",
            DiseaseCategory::Gastrointestinal => "gastrointestinal",
            DiseaseCategory::Neurological => "neurological",
            DiseaseCategory::Urinary => "urinary",
            DiseaseCategory::Ophthalmic => "ophthalmic",
        }
    }
}

/// Catalog entry describing one disease and its diagnostic rule sets.
///
/// The four symptom sets drive the scoring model: `required` must be present
/// for strong support, `common` and `optional` raise confidence, `excluding`
/// contradicts the diagnosis. `required` and `excluding` must be disjoint,
/// as must `common` and `optional`; the store enforces both at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: DiseaseId,
    pub name: String,
    pub description: String,
    pub category: DiseaseCategory,
    pub required: BTreeSet<SymptomId>,
    pub common: BTreeSet<SymptomId>,
    pub optional: BTreeSet<SymptomId>,
    pub excluding: BTreeSet<SymptomId>,
    pub severity: DiseaseSeverity,
    pub urgency: Urgency,
    pub typical_duration: DurationRange,
    pub contagious: bool,
    pub treatments: Vec<String>,
    pub warning_signs: Vec<String>,
    pub prevention: Vec<String>,
}

pub(crate) fn id_set(ids: &[&str]) -> BTreeSet<SymptomId> {
    ids.iter().map(|id| SymptomId::from(*id)).collect()
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
