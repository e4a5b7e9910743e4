pub mod commands;
mod model;

pub use model::{Activity, ActivityCategory, ActivityLevel, CategoryInfo};

use std::collections::HashSet;

use anyhow::{bail, Context, Result};

const DATASET: &str = include_str!("activities.json");

/// The fixed, ordered set of activities available for swiping. Loaded and
/// validated once at startup; read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    /// Parses the embedded dataset. A malformed dataset is a startup
    /// configuration error, never a runtime condition.
    pub fn load() -> Result<Self> {
        Self::from_json(DATASET)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let activities: Vec<Activity> =
            serde_json::from_str(raw).context("failed to parse activity dataset")?;

        if activities.is_empty() {
            bail!("activity dataset is empty");
        }

        let mut seen_ids = HashSet::new();
        for activity in &activities {
            if activity.id == 0 {
                bail!("activity '{}' has id 0; ids must be positive", activity.title);
            }
            if !seen_ids.insert(activity.id) {
                bail!("duplicate activity id {} in dataset", activity.id);
            }
        }

        Ok(Self { activities })
    }

    #[cfg(test)]
    pub(crate) fn from_activities(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// The activity at a cursor position, or `None` past the end (the
    /// exhausted display state).
    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    pub fn activity_by_id(&self, id: u32) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    pub fn activities_by_category(&self, category: ActivityCategory) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.category == category)
            .cloned()
            .collect()
    }
}
