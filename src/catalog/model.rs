use serde::{Deserialize, Serialize};

/// One of the six fixed activity categories of the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    ArtCreativity,
    SportFitness,
    Wellness,
    Culture,
    Learning,
    Gastronomy,
}

/// Display metadata for a category. The mapping is exhaustive over
/// `ActivityCategory`, so every activity resolves to an entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::ArtCreativity,
        ActivityCategory::SportFitness,
        ActivityCategory::Wellness,
        ActivityCategory::Culture,
        ActivityCategory::Learning,
        ActivityCategory::Gastronomy,
    ];

    pub fn info(&self) -> CategoryInfo {
        match self {
            ActivityCategory::ArtCreativity => CategoryInfo {
                icon: "🎨",
                label: "Art & Créativité",
                color: "#FF6B6B",
            },
            ActivityCategory::SportFitness => CategoryInfo {
                icon: "🏃‍♂️",
                label: "Sport & Fitness",
                color: "#4ECDC4",
            },
            ActivityCategory::Wellness => CategoryInfo {
                icon: "🧘‍♀️",
                label: "Bien-être",
                color: "#95A5A6",
            },
            ActivityCategory::Culture => CategoryInfo {
                icon: "🎭",
                label: "Culture",
                color: "#9B59B6",
            },
            ActivityCategory::Learning => CategoryInfo {
                icon: "🔬",
                label: "Apprentissage",
                color: "#3498DB",
            },
            ActivityCategory::Gastronomy => CategoryInfo {
                icon: "🍳",
                label: "Gastronomie",
                color: "#F39C12",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }
}

/// Difficulty levels as authored in the dataset. The display strings are
/// part of the fixed French catalog content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityLevel {
    #[serde(rename = "Débutant")]
    Beginner,
    #[serde(rename = "Intermédiaire")]
    Intermediate,
    #[serde(rename = "Avancé")]
    Advanced,
    #[serde(rename = "Tous niveaux")]
    AllLevels,
    #[serde(rename = "Facile")]
    Easy,
}

/// A catalog entry. Immutable after load; the image is a URL the webview
/// loads on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub title: String,
    pub category: ActivityCategory,
    pub description: String,
    pub location: String,
    pub price: String,
    pub duration: String,
    pub level: ActivityLevel,
    pub image: String,
}

impl Activity {
    #[cfg(test)]
    pub(crate) fn sample(id: u32, category: ActivityCategory) -> Self {
        Self {
            id,
            title: format!("Activity {id}"),
            category,
            description: "Sample description".into(),
            location: "Lausanne".into(),
            price: "CHF 25".into(),
            duration: "1h".into(),
            level: ActivityLevel::Beginner,
            image: format!("https://example.com/{id}.jpg"),
        }
    }
}
