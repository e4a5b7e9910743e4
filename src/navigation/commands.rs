use tauri::{Runtime, State};

use crate::AppState;

use super::{NavigationState, Screen};

#[tauri::command]
pub async fn get_navigation_state<R: Runtime>(
    state: State<'_, AppState<R>>,
) -> Result<NavigationState, String> {
    Ok(state.navigation.get_state().await)
}

#[tauri::command]
pub async fn navigate<R: Runtime>(
    state: State<'_, AppState<R>>,
    screen: Screen,
) -> Result<NavigationState, String> {
    Ok(state.navigation.navigate(screen).await)
}
