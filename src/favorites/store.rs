use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::Activity;

use super::stats::{self, CategoryStat};

/// A liked activity. The catalog fields ride along flattened, the way the
/// favorites screen consumes them, plus the moment the like was committed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub liked_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesChangedEvent {
    pub count: usize,
}

/// In-memory list of liked activities, in like order. Populated only by
/// right-swipe commits; duplicates are permitted (an activity can be liked
/// again after undo), so removal always clears every entry with the id.
pub struct FavoritesStore {
    inner: Arc<Mutex<Vec<FavoriteActivity>>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends `activity` stamped with the current time and returns the new
    /// favorites count.
    pub async fn add(&self, activity: Activity) -> usize {
        let mut favorites = self.inner.lock().await;
        info!("Added '{}' to favorites", activity.title);
        favorites.push(FavoriteActivity {
            activity,
            liked_at: Utc::now(),
        });
        favorites.len()
    }

    /// Removes every entry with the given id. Returns how many were removed.
    pub async fn remove(&self, activity_id: u32) -> usize {
        let mut favorites = self.inner.lock().await;
        let before = favorites.len();
        favorites.retain(|favorite| favorite.activity.id != activity_id);
        let removed = before - favorites.len();
        if removed > 0 {
            info!("Removed activity {activity_id} from favorites ({removed} entries)");
        }
        removed
    }

    pub async fn list(&self) -> Vec<FavoriteActivity> {
        self.inner.lock().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Category counts, recomputed fresh from current contents.
    pub async fn category_stats(&self) -> Vec<CategoryStat> {
        stats::category_stats(&self.inner.lock().await)
    }

    /// The `limit` most-liked categories, recomputed fresh.
    pub async fn top_categories(&self, limit: usize) -> Vec<CategoryStat> {
        stats::top_categories(&self.inner.lock().await, limit)
    }
}

impl Clone for FavoritesStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::ActivityCategory;

    use super::*;

    #[tokio::test]
    async fn add_appends_in_like_order_with_timestamp() {
        let store = FavoritesStore::new();
        assert_eq!(store.add(Activity::sample(1, ActivityCategory::Culture)).await, 1);
        assert_eq!(store.add(Activity::sample(2, ActivityCategory::Wellness)).await, 2);

        let favorites = store.list().await;
        assert_eq!(favorites[0].activity.id, 1);
        assert_eq!(favorites[1].activity.id, 2);
        assert!(favorites[0].liked_at <= favorites[1].liked_at);
    }

    #[tokio::test]
    async fn duplicate_likes_are_permitted() {
        let store = FavoritesStore::new();
        let activity = Activity::sample(7, ActivityCategory::Learning);
        store.add(activity.clone()).await;
        store.add(activity).await;

        assert_eq!(store.count().await, 2);
        let stats = store.category_stats().await;
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].count, 2);
    }

    #[tokio::test]
    async fn remove_clears_every_entry_with_the_id() {
        let store = FavoritesStore::new();
        let duplicated = Activity::sample(7, ActivityCategory::Learning);
        store.add(duplicated.clone()).await;
        store.add(Activity::sample(8, ActivityCategory::Culture)).await;
        store.add(duplicated).await;

        assert_eq!(store.remove(7).await, 2);
        assert_eq!(store.count().await, 1);
        assert_eq!(store.list().await[0].activity.id, 8);

        let stats = store.category_stats().await;
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].category, ActivityCategory::Culture);
    }

    #[tokio::test]
    async fn remove_of_unknown_id_is_a_noop() {
        let store = FavoritesStore::new();
        store.add(Activity::sample(1, ActivityCategory::Culture)).await;
        assert_eq!(store.remove(99).await, 0);
        assert_eq!(store.count().await, 1);
    }
}
