use serde::Serialize;
use tauri::{Runtime, State};

use crate::{
    catalog::{Activity, ActivityCategory, CategoryInfo},
    AppState,
};

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub category: ActivityCategory,
    #[serde(flatten)]
    pub info: CategoryInfo,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub activities: Vec<Activity>,
    pub categories: Vec<CategoryEntry>,
}

#[tauri::command]
pub async fn get_catalog<R: Runtime>(state: State<'_, AppState<R>>) -> Result<CatalogInfo, String> {
    let categories = ActivityCategory::ALL
        .iter()
        .map(|&category| CategoryEntry {
            category,
            info: category.info(),
        })
        .collect();

    Ok(CatalogInfo {
        activities: state.catalog.activities().to_vec(),
        categories,
    })
}

#[tauri::command]
pub async fn get_activities_by_category<R: Runtime>(
    state: State<'_, AppState<R>>,
    category: ActivityCategory,
) -> Result<Vec<Activity>, String> {
    Ok(state.catalog.activities_by_category(category))
}
