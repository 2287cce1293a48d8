use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for symptoms in the knowledge catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymptomId(pub String);

impl SymptomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymptomId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Reported intensity of a symptom, ordered mild through critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl SeverityLevel {
    /// Ordinal used by the scoring model (mild = 1 .. critical = 4).
    pub const fn ordinal(self) -> u8 {
        match self {
            SeverityLevel::Mild => 1,
            SeverityLevel::Moderate => 2,
            SeverityLevel::Severe => 3,
            SeverityLevel::Critical => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Severe => "severe",
            SeverityLevel::Critical => "critical",
        }
    }
}

/// Anatomical/physiological domain a symptom belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Respiratory,
    Digestive,
    Neurological,
    Dermatological,
    Cardiovascular,
    Musculoskeletal,
    General,
    Urinary,
    Ophthalmic,
    EarNoseThroat,
}

impl SymptomCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Digestive => "digestive",
            SymptomCategory::Neurological => "neurological",
            SymptomCategory::Dermatological => "dermatological",
            SymptomCategory::Cardiovascular => "cardiovascular",
            SymptomCategory::Musculoskeletal => "musculoskeletal",
            SymptomCategory::General => "general",
            SymptomCategory::Urinary => "urinary",
            SymptomCategory::Ophthalmic => "ophthalmic",
            SymptomCategory::EarNoseThroat => "ear_nose_throat",
        }
    }
}

/// Catalog entry describing one symptom. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub name: String,
    pub category: SymptomCategory,
    pub description: String,
    pub severity_weight: f64,
    pub related: Vec<SymptomId>,
}

impl Symptom {
    pub fn new(
        id: &str,
        name: &str,
        category: SymptomCategory,
        description: &str,
        severity_weight: f64,
        related: &[&str],
    ) -> Self {
        Self {
            id: SymptomId::from(id),
            name: name.to_string(),
            category,
            description: description.to_string(),
            severity_weight,
            related: related.iter().map(|r| SymptomId::from(*r)).collect(),
        }
    }
}
