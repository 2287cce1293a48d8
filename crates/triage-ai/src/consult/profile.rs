use serde::{Deserialize, Serialize};

use crate::knowledge::{SeverityLevel, SymptomId};

/// One reported symptom with its intensity and how long it has lasted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomObservation {
    pub symptom_id: SymptomId,
    pub severity: SeverityLevel,
    pub duration_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SymptomObservation {
    pub fn new(symptom_id: impl Into<SymptomId>, severity: SeverityLevel, duration_days: u32) -> Self {
        Self {
            symptom_id: symptom_id.into(),
            severity,
            duration_days,
            note: None,
        }
    }
}

/// The symptoms a patient currently reports. At most one observation per
/// symptom id; re-adding a symptom replaces the earlier observation in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    observations: Vec<SymptomObservation>,
}

impl PatientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation, replacing any existing one for the same symptom.
    pub fn add(&mut self, observation: SymptomObservation) {
        match self
            .observations
            .iter_mut()
            .find(|o| o.symptom_id == observation.symptom_id)
        {
            Some(existing) => *existing = observation,
            None => self.observations.push(observation),
        }
    }

    /// Remove a symptom from the profile; returns whether it was present.
    pub fn remove(&mut self, symptom_id: &SymptomId) -> bool {
        let before = self.observations.len();
        self.observations.retain(|o| &o.symptom_id != symptom_id);
        self.observations.len() != before
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn has(&self, symptom_id: &SymptomId) -> bool {
        self.observation(symptom_id).is_some()
    }

    pub fn observation(&self, symptom_id: &SymptomId) -> Option<&SymptomObservation> {
        self.observations.iter().find(|o| &o.symptom_id == symptom_id)
    }

    pub fn severity(&self, symptom_id: &SymptomId) -> Option<SeverityLevel> {
        self.observation(symptom_id).map(|o| o.severity)
    }

    pub fn duration(&self, symptom_id: &SymptomId) -> Option<u32> {
        self.observation(symptom_id).map(|o| o.duration_days)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymptomObservation> {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_same_symptom_replaces_in_place() {
        let mut profile = PatientProfile::new();
        profile.add(SymptomObservation::new("fever", SeverityLevel::Mild, 1));
        profile.add(SymptomObservation::new("cough", SeverityLevel::Mild, 2));
        profile.add(SymptomObservation::new("fever", SeverityLevel::Severe, 3));

        assert_eq!(profile.len(), 2);
        assert_eq!(
            profile.severity(&SymptomId::from("fever")),
            Some(SeverityLevel::Severe)
        );
        // Replacement keeps the original position.
        let ids: Vec<&str> = profile.iter().map(|o| o.symptom_id.as_str()).collect();
        assert_eq!(ids, vec!["fever", "cough"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut profile = PatientProfile::new();
        profile.add(SymptomObservation::new("fever", SeverityLevel::Mild, 1));
        assert!(profile.remove(&SymptomId::from("fever")));
        assert!(!profile.remove(&SymptomId::from("fever")));
        assert!(profile.is_empty());
    }
}
