use tracing::debug;

use crate::models::SymptomCategory;

/// Body-area categories offered on the symptom browsing screen.
#[derive(Debug, Clone)]
pub struct SymptomCatalog {
    categories: Vec<SymptomCategory>,
}

impl SymptomCatalog {
    pub fn new(categories: Vec<SymptomCategory>) -> Self {
        Self { categories }
    }

    pub fn standard() -> Self {
        let categories = [
            ("head", "🤕", "Head & Neurological", ["Headache", "Dizziness", "Nausea"]),
            ("chest", "❤️", "Chest & Heart", ["Chest pain", "Shortness of breath", "Palpitations"]),
            ("abdomen", "🫃", "Abdomen & Digestion", ["Stomach pain", "Nausea", "Bloating"]),
            ("skin", "🩹", "Skin & Rash", ["Rash", "Itching", "Swelling"]),
            ("joint", "🦴", "Joints & Muscles", ["Joint pain", "Muscle ache", "Stiffness"]),
            ("respiratory", "🫁", "Respiratory", ["Cough", "Sore throat", "Congestion"]),
        ]
        .into_iter()
        .map(|(id, icon, name, symptoms)| SymptomCategory {
            id: id.to_string(),
            icon: icon.to_string(),
            name: name.to_string(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

        Self::new(categories)
    }

    pub fn categories(&self) -> &[SymptomCategory] {
        &self.categories
    }

    /// Case-insensitive search.
    ///
    /// A category whose name matches is returned whole. Otherwise it is
    /// returned with only its matching symptoms, or dropped when none match.
    /// A blank query returns every category.
    pub fn search(&self, query: &str) -> Vec<SymptomCategory> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.categories.clone();
        }

        let matches: Vec<SymptomCategory> = self
            .categories
            .iter()
            .filter_map(|category| {
                if category.name.to_lowercase().contains(&needle) {
                    return Some(category.clone());
                }

                let symptoms: Vec<String> = category
                    .symptoms
                    .iter()
                    .filter(|s| s.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();

                (!symptoms.is_empty()).then(|| SymptomCategory {
                    symptoms,
                    ..category.clone()
                })
            })
            .collect();

        debug!("Symptom search '{}' matched {} categories", needle, matches.len());
        matches
    }
}

impl Default for SymptomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
