pub mod commands;
mod stats;
mod store;

pub use stats::CategoryStat;
pub use store::{FavoriteActivity, FavoritesChangedEvent, FavoritesStore};
