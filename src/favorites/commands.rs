use log::info;
use tauri::{AppHandle, Emitter, Runtime, State};

use crate::AppState;

use super::stats::CategoryStat;
use super::store::{FavoriteActivity, FavoritesChangedEvent};

#[tauri::command]
pub async fn get_favorites<R: Runtime>(
    state: State<'_, AppState<R>>,
) -> Result<Vec<FavoriteActivity>, String> {
    Ok(state.favorites.list().await)
}

#[tauri::command]
pub async fn remove_favorite<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, AppState<R>>,
    activity_id: u32,
) -> Result<Vec<FavoriteActivity>, String> {
    let removed = state.favorites.remove(activity_id).await;
    if removed > 0 {
        let count = state.favorites.count().await;
        let _ = app.emit("favorites-changed", FavoritesChangedEvent { count });
    }
    Ok(state.favorites.list().await)
}

#[tauri::command]
pub async fn get_category_stats<R: Runtime>(
    state: State<'_, AppState<R>>,
) -> Result<Vec<CategoryStat>, String> {
    Ok(state.favorites.category_stats().await)
}

#[tauri::command]
pub async fn get_top_categories<R: Runtime>(
    state: State<'_, AppState<R>>,
    limit: usize,
) -> Result<Vec<CategoryStat>, String> {
    Ok(state.favorites.top_categories(limit).await)
}

/// Booking is not wired to a backend yet. The command validates the id so the
/// UI gets a real error for a stale card, then just records the intent.
#[tauri::command]
pub async fn reserve_activity<R: Runtime>(
    state: State<'_, AppState<R>>,
    activity_id: u32,
) -> Result<(), String> {
    let activity = state
        .catalog
        .activity_by_id(activity_id)
        .ok_or_else(|| format!("Unknown activity id: {activity_id}"))?;
    info!("Reservation requested for '{}'", activity.title);
    Ok(())
}
