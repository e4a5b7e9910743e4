use tauri::{Runtime, State};

use crate::AppState;

use super::{SwipeController, SwipeDirection, SwipeSnapshot};

fn controller_from_state<R: Runtime>(state: &State<'_, AppState<R>>) -> SwipeController<R> {
    state.swipe.clone()
}

#[tauri::command]
pub async fn get_swipe_state<R: Runtime>(
    state: State<'_, AppState<R>>,
) -> Result<SwipeSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.get_snapshot().await)
}

#[tauri::command]
pub async fn swipe_commit<R: Runtime>(
    state: State<'_, AppState<R>>,
    direction: SwipeDirection,
) -> Result<SwipeSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.commit(direction).await)
}

#[tauri::command]
pub async fn swipe_drag_end<R: Runtime>(
    state: State<'_, AppState<R>>,
    offset_x: f64,
    velocity_x: f64,
) -> Result<SwipeSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.drag_end(offset_x, velocity_x).await)
}

#[tauri::command]
pub async fn swipe_undo<R: Runtime>(
    state: State<'_, AppState<R>>,
) -> Result<SwipeSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.undo().await)
}

#[tauri::command]
pub async fn swipe_restart<R: Runtime>(
    state: State<'_, AppState<R>>,
) -> Result<SwipeSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.restart().await)
}
