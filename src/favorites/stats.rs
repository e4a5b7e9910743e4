use serde::Serialize;

use crate::catalog::ActivityCategory;

use super::store::FavoriteActivity;

/// One category's slice of the favorites list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: ActivityCategory,
    pub label: &'static str,
    pub count: usize,
}

/// Counts favorites per category. Categories appear in the order they were
/// first liked, which keeps the stats row layout steady while counts grow.
pub fn category_stats(favorites: &[FavoriteActivity]) -> Vec<CategoryStat> {
    let mut stats: Vec<CategoryStat> = Vec::new();
    for favorite in favorites {
        let category = favorite.activity.category;
        match stats.iter_mut().find(|stat| stat.category == category) {
            Some(stat) => stat.count += 1,
            None => stats.push(CategoryStat {
                category,
                label: category.label(),
                count: 1,
            }),
        }
    }
    stats
}

/// The `limit` categories with the most likes, descending. Ties keep
/// first-liked order (the sort is stable over `category_stats` output).
pub fn top_categories(favorites: &[FavoriteActivity], limit: usize) -> Vec<CategoryStat> {
    let mut stats = category_stats(favorites);
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(limit);
    stats
}
