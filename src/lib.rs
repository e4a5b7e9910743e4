mod catalog;
mod favorites;
mod navigation;
mod swipe;

use std::sync::Arc;

use catalog::{
    commands::{get_activities_by_category, get_catalog},
    Catalog,
};
use favorites::{
    commands::{
        get_category_stats, get_favorites, get_top_categories, remove_favorite, reserve_activity,
    },
    FavoritesStore,
};
use log::info;
use navigation::{
    commands::{get_navigation_state, navigate},
    NavigationController,
};
use swipe::{
    commands::{get_swipe_state, swipe_commit, swipe_drag_end, swipe_restart, swipe_undo},
    SwipeController,
};
use tauri::Manager;

pub(crate) struct AppState<R: tauri::Runtime> {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) swipe: SwipeController<R>,
    pub(crate) favorites: FavoritesStore,
    pub(crate) navigation: NavigationController<R>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("ActivitySwipe starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let catalog = Arc::new(Catalog::load()?);
                info!("Catalog loaded with {} activities", catalog.len());

                let favorites = FavoritesStore::new();
                let navigation = NavigationController::new(app.handle().clone());
                let swipe = SwipeController::new(
                    app.handle().clone(),
                    catalog.clone(),
                    favorites.clone(),
                    navigation.clone(),
                );

                app.manage(AppState {
                    catalog,
                    swipe,
                    favorites,
                    navigation,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            get_catalog,
            get_activities_by_category,
            get_swipe_state,
            swipe_commit,
            swipe_drag_end,
            swipe_undo,
            swipe_restart,
            get_favorites,
            remove_favorite,
            get_category_stats,
            get_top_categories,
            reserve_activity,
            get_navigation_state,
            navigate,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
