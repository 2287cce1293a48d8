//! Bundled standard catalog: the symptoms and diseases the service ships with.
//!
//! Content is intentionally conservative: ten common ambulatory conditions
//! and the symptoms their rule sets reference. The catalog is data, not
//! logic; the reasoning core works against any validated [`super::KnowledgeStore`].

use super::diseases::{
    id_set, strings, Disease, DiseaseCategory, DiseaseId, DiseaseSeverity, DurationRange, Urgency,
};
use super::symptoms::{Symptom, SymptomCategory as Cat};

pub(crate) fn standard_symptoms() -> Vec<Symptom> {
    vec![
        // General
        Symptom::new(
            "fever",
            "Fever",
            Cat::General,
            "Body temperature above 38\u{b0}C",
            2.0,
            &["chills", "sweating", "fatigue", "headache"],
        ),
        Symptom::new(
            "chills",
            "Chills",
            Cat::General,
            "Feeling cold with shivering",
            1.5,
            &["fever", "muscle-pain"],
        ),
        Symptom::new(
            "fatigue",
            "Fatigue",
            Cat::General,
            "Marked tiredness and lack of energy",
            1.3,
            &["fever", "muscle-pain"],
        ),
        Symptom::new(
            "sweating",
            "Excessive sweating",
            Cat::General,
            "Abnormal or nocturnal sweating",
            1.1,
            &["fever", "chills"],
        ),
        Symptom::new(
            "appetite-loss",
            "Loss of appetite",
            Cat::General,
            "Reduced desire to eat",
            1.2,
            &["nausea", "fatigue"],
        ),
        Symptom::new(
            "malaise",
            "General malaise",
            Cat::General,
            "Overall feeling of being unwell",
            1.0,
            &["fatigue", "fever"],
        ),
        Symptom::new(
            "light-sensitivity",
            "Light sensitivity",
            Cat::General,
            "Photophobia, discomfort in bright light",
            1.5,
            &["headache", "red-eyes"],
        ),
        Symptom::new(
            "sound-sensitivity",
            "Sound sensitivity",
            Cat::General,
            "Excessive discomfort with noise",
            1.4,
            &["headache"],
        ),
        // Respiratory
        Symptom::new(
            "dry-cough",
            "Dry cough",
            Cat::Respiratory,
            "Cough without sputum production",
            1.2,
            &["productive-cough", "sore-throat"],
        ),
        Symptom::new(
            "productive-cough",
            "Productive cough",
            Cat::Respiratory,
            "Cough with expectoration of mucus",
            1.5,
            &["dry-cough", "nasal-congestion", "shortness-of-breath"],
        ),
        Symptom::new(
            "shortness-of-breath",
            "Shortness of breath",
            Cat::Respiratory,
            "Breathlessness or labored breathing",
            2.5,
            &["productive-cough", "chest-pain", "wheezing"],
        ),
        Symptom::new(
            "nasal-congestion",
            "Nasal congestion",
            Cat::Respiratory,
            "Blocked or stuffy nose",
            0.8,
            &["sneezing", "headache"],
        ),
        Symptom::new(
            "sneezing",
            "Frequent sneezing",
            Cat::Respiratory,
            "Repeated sneezing episodes",
            0.7,
            &["nasal-congestion"],
        ),
        Symptom::new(
            "wheezing",
            "Wheezing",
            Cat::Respiratory,
            "Whistling sound while breathing",
            2.0,
            &["shortness-of-breath", "productive-cough"],
        ),
        // Digestive
        Symptom::new(
            "nausea",
            "Nausea",
            Cat::Digestive,
            "Stomach discomfort with an urge to vomit",
            1.4,
            &["vomiting", "abdominal-pain", "appetite-loss"],
        ),
        Symptom::new(
            "vomiting",
            "Vomiting",
            Cat::Digestive,
            "Forceful expulsion of stomach contents",
            1.8,
            &["nausea", "diarrhea"],
        ),
        Symptom::new(
            "diarrhea",
            "Diarrhea",
            Cat::Digestive,
            "Frequent loose or liquid stools",
            1.6,
            &["abdominal-pain", "nausea"],
        ),
        Symptom::new(
            "abdominal-pain",
            "Abdominal pain",
            Cat::Digestive,
            "Pain or discomfort in the abdomen",
            1.5,
            &["nausea", "diarrhea", "heartburn"],
        ),
        Symptom::new(
            "lower-abdominal-pain",
            "Lower abdominal pain",
            Cat::Digestive,
            "Pain localized to the lower abdomen",
            1.5,
            &["abdominal-pain", "painful-urination"],
        ),
        Symptom::new(
            "heartburn",
            "Heartburn",
            Cat::Digestive,
            "Burning sensation in the chest or throat",
            1.2,
            &["abdominal-pain"],
        ),
        Symptom::new(
            "bloating",
            "Abdominal bloating",
            Cat::Digestive,
            "Sensation of a distended abdomen",
            1.0,
            &["abdominal-pain"],
        ),
        Symptom::new(
            "swallowing-pain",
            "Painful swallowing",
            Cat::Digestive,
            "Pain or difficulty when swallowing",
            1.9,
            &["sore-throat"],
        ),
        // Neurological
        Symptom::new(
            "headache",
            "Headache",
            Cat::Neurological,
            "Head pain of variable intensity",
            1.3,
            &["fever", "nasal-congestion", "dizziness"],
        ),
        Symptom::new(
            "dizziness",
            "Dizziness",
            Cat::Neurological,
            "Sensation of lightheadedness or unsteadiness",
            1.5,
            &["headache", "nausea", "blurred-vision"],
        ),
        Symptom::new(
            "facial-pain",
            "Facial pain",
            Cat::Neurological,
            "Pain over the face and paranasal sinuses",
            1.6,
            &["headache", "nasal-congestion", "facial-pressure"],
        ),
        Symptom::new(
            "facial-pressure",
            "Facial pressure",
            Cat::Neurological,
            "Pressure over forehead and cheeks",
            1.5,
            &["facial-pain", "nasal-congestion"],
        ),
        // Musculoskeletal
        Symptom::new(
            "muscle-pain",
            "Muscle aches",
            Cat::Musculoskeletal,
            "Diffuse muscular pain",
            1.4,
            &["fatigue", "chills"],
        ),
        Symptom::new(
            "chest-pain",
            "Chest pain",
            Cat::Cardiovascular,
            "Pain or tightness in the chest",
            2.4,
            &["shortness-of-breath"],
        ),
        // Ear / nose / throat
        Symptom::new(
            "sore-throat",
            "Sore throat",
            Cat::EarNoseThroat,
            "Pain, irritation or itchiness in the throat",
            1.3,
            &["dry-cough", "fever", "swallowing-pain"],
        ),
        Symptom::new(
            "tooth-pain",
            "Tooth pain",
            Cat::EarNoseThroat,
            "Dental or maxillary pain",
            1.8,
            &["facial-pain"],
        ),
        Symptom::new(
            "bad-breath",
            "Bad breath",
            Cat::EarNoseThroat,
            "Persistent halitosis",
            0.9,
            &["nasal-congestion"],
        ),
        // Urinary
        Symptom::new(
            "painful-urination",
            "Painful urination",
            Cat::Urinary,
            "Burning or pain while urinating",
            1.9,
            &["urinary-frequency", "urinary-urgency"],
        ),
        Symptom::new(
            "urinary-frequency",
            "Urinary frequency",
            Cat::Urinary,
            "Needing to urinate more often than usual",
            1.4,
            &["painful-urination", "urinary-urgency"],
        ),
        Symptom::new(
            "urinary-urgency",
            "Urinary urgency",
            Cat::Urinary,
            "Sudden compelling need to urinate",
            1.4,
            &["urinary-frequency"],
        ),
        Symptom::new(
            "cloudy-urine",
            "Cloudy urine",
            Cat::Urinary,
            "Turbid or foul-smelling urine",
            1.3,
            &["painful-urination"],
        ),
        // Ophthalmic
        Symptom::new(
            "red-eyes",
            "Red eyes",
            Cat::Ophthalmic,
            "Redness of the conjunctiva",
            1.2,
            &["eye-itching", "tearing"],
        ),
        Symptom::new(
            "eye-itching",
            "Itchy eyes",
            Cat::Ophthalmic,
            "Itching sensation in the eyes",
            1.0,
            &["red-eyes", "tearing"],
        ),
        Symptom::new(
            "tearing",
            "Excessive tearing",
            Cat::Ophthalmic,
            "Watery eyes beyond normal",
            0.9,
            &["red-eyes"],
        ),
        Symptom::new(
            "eye-discharge",
            "Eye discharge",
            Cat::Ophthalmic,
            "Secretion from one or both eyes",
            1.3,
            &["red-eyes", "tearing"],
        ),
        Symptom::new(
            "blurred-vision",
            "Blurred vision",
            Cat::Ophthalmic,
            "Loss of visual sharpness",
            1.7,
            &["dizziness", "headache"],
        ),
        // Dermatological
        Symptom::new(
            "skin-rash",
            "Skin rash",
            Cat::Dermatological,
            "Visible eruption or discoloration of the skin",
            1.6,
            &["fever"],
        ),
    ]
}

pub(crate) fn standard_diseases() -> Vec<Disease> {
    vec![
        Disease {
            id: DiseaseId::from("influenza"),
            name: "Influenza".to_string(),
            description: "Acute viral infection of the respiratory system".to_string(),
            category: DiseaseCategory::Respiratory,
            required: id_set(&["fever", "fatigue"]),
            common: id_set(&[
                "headache",
                "muscle-pain",
                "dry-cough",
                "chills",
                "sore-throat",
                "sweating",
            ]),
            optional: id_set(&["nasal-congestion", "sneezing", "nausea", "appetite-loss"]),
            excluding: id_set(&["diarrhea", "vomiting", "skin-rash"]),
            severity: DiseaseSeverity::Moderate,
            urgency: Urgency::SelfCare,
            typical_duration: DurationRange::new(2, 10),
            contagious: true,
            treatments: strings(&[
                "Rest for 3-5 days",
                "Abundant hydration (2-3 liters of water per day)",
                "Antipyretics for fever and body aches",
                "Antivirals if diagnosed within the first 48 hours",
            ]),
            warning_signs: strings(&[
                "Fever above 39.5\u{b0}C unresponsive to medication",
                "Severe breathing difficulty",
                "Persistent chest pain",
                "Confusion or intense dizziness",
            ]),
            prevention: strings(&[
                "Annual influenza vaccination",
                "Frequent hand washing",
                "Keep distance from sick contacts",
            ]),
        },
        Disease {
            id: DiseaseId::from("common-cold"),
            name: "Common Cold".to_string(),
            description: "Mild viral infection of the upper respiratory tract".to_string(),
            category: DiseaseCategory::Respiratory,
            required: id_set(&["nasal-congestion"]),
            common: id_set(&["sneezing", "sore-throat", "dry-cough", "headache"]),
            optional: id_set(&["fatigue", "muscle-pain"]),
            excluding: id_set(&["fever"]),
            severity: DiseaseSeverity::Mild,
            urgency: Urgency::SelfCare,
            typical_duration: DurationRange::new(3, 10),
            contagious: true,
            treatments: strings(&[
                "Adequate rest",
                "Warm liquids and salt-water gargles",
                "Nasal decongestants if needed",
            ]),
            warning_signs: strings(&[
                "Symptoms lasting more than 10 days",
                "High fever (above 38.5\u{b0}C)",
                "Difficulty breathing",
            ]),
            prevention: strings(&[
                "Frequent hand washing",
                "Avoid close contact with people who have a cold",
            ]),
        },
        Disease {
            id: DiseaseId::from("gastritis"),
            name: "Acute Gastritis".to_string(),
            description: "Inflammation of the gastric mucosa".to_string(),
            category: DiseaseCategory::Gastrointestinal,
            required: id_set(&["abdominal-pain", "heartburn"]),
            common: id_set(&["nausea", "appetite-loss", "bloating"]),
            optional: id_set(&["vomiting", "malaise"]),
            excluding: id_set(&["diarrhea", "fever"]),
            severity: DiseaseSeverity::Moderate,
            urgency: Urgency::ScheduleVisit,
            typical_duration: DurationRange::new(2, 7),
            contagious: false,
            treatments: strings(&[
                "Avoid irritating foods (spicy, acidic, fried)",
                "Small frequent meals",
                "Antacids or proton-pump inhibitors",
            ]),
            warning_signs: strings(&[
                "Vomiting blood",
                "Black or bloody stools",
                "Severe abdominal pain",
            ]),
            prevention: strings(&[
                "Limit coffee and alcohol",
                "Do not skip meals",
                "Manage stress",
            ]),
        },
        Disease {
            id: DiseaseId::from("gastroenteritis"),
            name: "Acute Gastroenteritis".to_string(),
            description: "Inflammation of the gastrointestinal tract, usually viral".to_string(),
            category: DiseaseCategory::Gastrointestinal,
            required: id_set(&["diarrhea"]),
            common: id_set(&["nausea", "vomiting", "abdominal-pain", "fever"]),
            optional: id_set(&["chills", "headache", "fatigue", "appetite-loss"]),
            excluding: id_set(&[]),
            severity: DiseaseSeverity::Moderate,
            urgency: Urgency::ScheduleVisit,
            typical_duration: DurationRange::new(1, 4),
            contagious: true,
            treatments: strings(&[
                "Constant oral rehydration",
                "Liquid then bland diet (rice, banana)",
                "Temporarily avoid dairy",
            ]),
            warning_signs: strings(&[
                "Severe dehydration (dark urine, very dry mouth)",
                "Blood in stools",
                "Fever above 39\u{b0}C",
            ]),
            prevention: strings(&[
                "Hand washing before eating",
                "Drink safe water",
                "Cook food thoroughly",
            ]),
        },
        Disease {
            id: DiseaseId::from("bronchitis"),
            name: "Acute Bronchitis".to_string(),
            description: "Inflammation of the bronchi, usually after a viral infection"
                .to_string(),
            category: DiseaseCategory::Respiratory,
            required: id_set(&["productive-cough"]),
            common: id_set(&["shortness-of-breath", "chest-pain", "fatigue", "wheezing"]),
            optional: id_set(&["fever", "sore-throat", "nasal-congestion", "headache"]),
            excluding: id_set(&[]),
            severity: DiseaseSeverity::Moderate,
            urgency: Urgency::ScheduleVisit,
            typical_duration: DurationRange::new(7, 21),
            contagious: true,
            treatments: strings(&[
                "Relative rest and abundant fluids",
                "Humidified air",
                "Bronchodilators and expectorants as directed",
            ]),
            warning_signs: strings(&[
                "Severe respiratory difficulty",
                "Persistent high fever",
                "Blood-streaked sputum",
            ]),
            prevention: strings(&[
                "Do not smoke",
                "Avoid environmental pollutants",
                "Influenza vaccination",
            ]),
        },
        Disease {
            id: DiseaseId::from("pharyngitis"),
            name: "Acute Pharyngitis".to_string(),
            description: "Inflammation of the pharynx".to_string(),
            category: DiseaseCategory::Respiratory,
            required: id_set(&["sore-throat"]),
            common: id_set(&["fever", "headache", "swallowing-pain"]),
            optional: id_set(&["dry-cough", "fatigue", "muscle-pain", "nasal-congestion"]),
            excluding: id_set(&["productive-cough", "wheezing"]),
            severity: DiseaseSeverity::Mild,
            urgency: Urgency::ScheduleVisit,
            typical_duration: DurationRange::new(3, 7),
            contagious: true,
            treatments: strings(&[
                "Warm salt-water gargles",
                "Throat lozenges and warm liquids",
                "Analgesics/antipyretics",
            ]),
            warning_signs: strings(&[
                "Severe difficulty swallowing or breathing",
                "Very high fever",
                "Markedly swollen lymph nodes",
            ]),
            prevention: strings(&[
                "Avoid contact with sick people",
                "Do not share utensils",
            ]),
        },
        Disease {
            id: DiseaseId::from("sinusitis"),
            name: "Acute Sinusitis".to_string(),
            description: "Inflammation of the paranasal sinuses".to_string(),
            category: DiseaseCategory::Respiratory,
            required: id_set(&["nasal-congestion", "headache"]),
            common: id_set(&["facial-pain", "facial-pressure", "productive-cough"]),
            optional: id_set(&["fever", "fatigue", "tooth-pain", "bad-breath"]),
            excluding: id_set(&[]),
            severity: DiseaseSeverity::Moderate,
            urgency: Urgency::ScheduleVisit,
            typical_duration: DurationRange::new(7, 14),
            contagious: false,
            treatments: strings(&[
                "Steam inhalation",
                "Saline nasal irrigation",
                "Warm facial compresses",
            ]),
            warning_signs: strings(&[
                "Worsening or severe symptoms",
                "Persistent high fever",
                "Vision changes or neck stiffness",
            ]),
            prevention: strings(&[
                "Treat allergies adequately",
                "Avoid nasal irritants",
            ]),
        },
        Disease {
            id: DiseaseId::from("migraine"),
            name: "Migraine".to_string(),
            description: "Recurrent intense headache with characteristic features".to_string(),
            category: DiseaseCategory::Neurological,
            required: id_set(&["headache"]),
            common: id_set(&[
                "nausea",
                "blurred-vision",
                "light-sensitivity",
                "sound-sensitivity",
            ]),
            optional: id_set(&["vomiting", "dizziness", "fatigue"]),
            excluding: id_set(&["fever", "productive-cough", "nasal-congestion"]),
            severity: DiseaseSeverity::Moderate,
            urgency: Urgency::ScheduleVisit,
            typical_duration: DurationRange::new(1, 3),
            contagious: false,
            treatments: strings(&[
                "Rest in a dark, quiet room",
                "Cold compresses on the head",
                "Specific analgesics (triptans) as prescribed",
            ]),
            warning_signs: strings(&[
                "First severe episode",
                "Sudden explosive headache",
                "New neurological symptoms",
            ]),
            prevention: strings(&[
                "Identify and avoid triggers",
                "Regular sleep schedule",
                "Stress management",
            ]),
        },
        Disease {
            id: DiseaseId::from("urinary-tract-infection"),
            name: "Urinary Tract Infection".to_string(),
            description: "Bacterial infection of the urinary system".to_string(),
            category: DiseaseCategory::Urinary,
            required: id_set(&["painful-urination"]),
            common: id_set(&["urinary-frequency", "urinary-urgency", "cloudy-urine"]),
            optional: id_set(&["lower-abdominal-pain", "fever", "chills"]),
            excluding: id_set(&["productive-cough", "nasal-congestion"]),
            severity: DiseaseSeverity::Moderate,
            urgency: Urgency::SeeSoon,
            typical_duration: DurationRange::new(2, 7),
            contagious: false,
            treatments: strings(&[
                "Drink plenty of water (2-3 liters per day)",
                "Urinate frequently, do not hold it",
                "Targeted antibiotics as prescribed",
            ]),
            warning_signs: strings(&[
                "High fever",
                "Intense flank pain",
                "Blood in urine",
            ]),
            prevention: strings(&[
                "Adequate hydration",
                "Do not retain urine",
            ]),
        },
        Disease {
            id: DiseaseId::from("conjunctivitis"),
            name: "Conjunctivitis".to_string(),
            description: "Inflammation of the conjunctiva of the eye".to_string(),
            category: DiseaseCategory::Ophthalmic,
            required: id_set(&["red-eyes"]),
            common: id_set(&["eye-itching", "tearing", "eye-discharge"]),
            optional: id_set(&["blurred-vision", "light-sensitivity"]),
            excluding: id_set(&["fever", "productive-cough"]),
            severity: DiseaseSeverity::Mild,
            urgency: Urgency::ScheduleVisit,
            typical_duration: DurationRange::new(5, 10),
            contagious: true,
            treatments: strings(&[
                "Clean the eyes with cooled boiled water",
                "Do not rub the eyes",
                "Artificial tears; antibiotic drops if bacterial",
            ]),
            warning_signs: strings(&[
                "Intense eye pain",
                "Vision loss",
                "Extreme light sensitivity",
            ]),
            prevention: strings(&[
                "Frequent hand washing",
                "Do not share towels",
            ]),
        },
    ]
}
