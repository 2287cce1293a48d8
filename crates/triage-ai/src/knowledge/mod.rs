//! Read-only medical knowledge: symptom and disease catalogs plus the
//! validated store the reasoning core queries.

mod catalog;
mod diseases;
mod symptoms;

pub use diseases::{
    Disease, DiseaseCategory, DiseaseId, DiseaseSeverity, DurationRange, Urgency,
};
pub use symptoms::{SeverityLevel, Symptom, SymptomCategory, SymptomId};

use std::collections::BTreeMap;

use thiserror::Error;

/// Catalog problems rejected when a store is assembled.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate symptom id '{0}' in catalog")]
    DuplicateSymptom(SymptomId),
    #[error("duplicate disease id '{0}' in catalog")]
    DuplicateDisease(DiseaseId),
    #[error("disease '{disease}' references unknown symptom '{symptom}'")]
    UnknownSymptomReference {
        disease: DiseaseId,
        symptom: SymptomId,
    },
    #[error("disease '{disease}' lists '{symptom}' as both required and excluding")]
    ConflictingRule {
        disease: DiseaseId,
        symptom: SymptomId,
    },
    #[error("disease '{disease}' lists '{symptom}' as both common and optional")]
    OverlappingSupport {
        disease: DiseaseId,
        symptom: SymptomId,
    },
}

/// Immutable, validated catalog of symptoms and diseases.
///
/// Every disease rule set is checked against the symptom catalog at
/// construction time, so the reasoning core can index without re-checking.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    symptoms: BTreeMap<SymptomId, Symptom>,
    diseases: BTreeMap<DiseaseId, Disease>,
}

impl KnowledgeStore {
    pub fn new(
        symptoms: Vec<Symptom>,
        diseases: Vec<Disease>,
    ) -> Result<Self, CatalogError> {
        let mut symptom_map = BTreeMap::new();
        for symptom in symptoms {
            if symptom_map.contains_key(&symptom.id) {
                return Err(CatalogError::DuplicateSymptom(symptom.id));
            }
            symptom_map.insert(symptom.id.clone(), symptom);
        }

        let mut disease_map = BTreeMap::new();
        for disease in diseases {
            if disease_map.contains_key(&disease.id) {
                return Err(CatalogError::DuplicateDisease(disease.id));
            }
            validate_rules(&disease, &symptom_map)?;
            disease_map.insert(disease.id.clone(), disease);
        }

        Ok(Self {
            symptoms: symptom_map,
            diseases: disease_map,
        })
    }

    /// The catalog bundled with the crate: ten common ambulatory conditions.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(catalog::standard_symptoms(), catalog::standard_diseases())
    }

    pub fn symptom(&self, id: &SymptomId) -> Option<&Symptom> {
        self.symptoms.get(id)
    }

    pub fn disease(&self, id: &DiseaseId) -> Option<&Disease> {
        self.diseases.get(id)
    }

    /// All diseases in stable id order.
    pub fn diseases(&self) -> impl Iterator<Item = &Disease> {
        self.diseases.values()
    }

    /// Symptoms in stable id order, optionally restricted to one category.
    pub fn symptoms(
        &self,
        category: Option<SymptomCategory>,
    ) -> impl Iterator<Item = &Symptom> + '_ {
        self.symptoms
            .values()
            .filter(move |s| category.map_or(true, |c| s.category == c))
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    pub fn disease_count(&self) -> usize {
        self.diseases.len()
    }
}

fn validate_rules(
    disease: &Disease,
    symptoms: &BTreeMap<SymptomId, Symptom>,
) -> Result<(), CatalogError> {
    let sets = [
        &disease.required,
        &disease.common,
        &disease.optional,
        &disease.excluding,
    ];
    for set in sets {
        for id in set {
            if !symptoms.contains_key(id) {
                return Err(CatalogError::UnknownSymptomReference {
                    disease: disease.id.clone(),
                    symptom: id.clone(),
                });
            }
        }
    }
    if let Some(id) = disease.required.intersection(&disease.excluding).next() {
        return Err(CatalogError::ConflictingRule {
            disease: disease.id.clone(),
            symptom: id.clone(),
        });
    }
    if let Some(id) = disease.common.intersection(&disease.optional).next() {
        return Err(CatalogError::OverlappingSupport {
            disease: disease.id.clone(),
            symptom: id.clone(),
        });
    }
    Ok(())
}
