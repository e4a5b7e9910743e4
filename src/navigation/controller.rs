use std::{sync::Arc, time::Duration};

use log::info;
use serde::Serialize;
use tauri::{AppHandle, Emitter, Runtime};
use tokio::{sync::Mutex, time};

use super::{NavigationState, Screen};

pub const NOTIFICATION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct NavigationChangedEvent {
    screen: Screen,
    notification_visible: bool,
}

pub struct NavigationController<R: Runtime> {
    state: Arc<Mutex<NavigationState>>,
    app_handle: AppHandle<R>,
    notification_delay: Duration,
}

impl<R: Runtime> NavigationController<R> {
    pub fn new(app_handle: AppHandle<R>) -> Self {
        Self {
            state: Arc::new(Mutex::new(NavigationState::new())),
            app_handle,
            notification_delay: NOTIFICATION_DELAY,
        }
    }

    pub async fn get_state(&self) -> NavigationState {
        self.state.lock().await.clone()
    }

    /// Switches to `screen` and returns the resulting state. Requesting the
    /// screen already active changes nothing and emits nothing.
    pub async fn navigate(&self, screen: Screen) -> NavigationState {
        let mut guard = self.state.lock().await;
        if guard.navigate(screen) {
            info!("Navigated to {screen:?}");
            emit_navigation_state(&self.app_handle, &guard);
        }
        guard.clone()
    }

    /// Shows the like notification and schedules its auto-hide. The hide
    /// task captures the notification generation, so a newer flash before
    /// the delay elapses supersedes it.
    pub async fn flash_notification(&self) {
        let generation = {
            let mut guard = self.state.lock().await;
            let generation = guard.show_notification();
            emit_navigation_state(&self.app_handle, &guard);
            generation
        };

        let state = self.state.clone();
        let app_handle = self.app_handle.clone();
        let delay = self.notification_delay;
        tokio::spawn(async move {
            time::sleep(delay).await;
            let mut guard = state.lock().await;
            if guard.auto_hide(generation) {
                emit_navigation_state(&app_handle, &guard);
            }
        });
    }
}

impl<R: Runtime> Clone for NavigationController<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            app_handle: self.app_handle.clone(),
            notification_delay: self.notification_delay,
        }
    }
}

fn emit_navigation_state<R: Runtime>(app_handle: &AppHandle<R>, state: &NavigationState) {
    let payload = NavigationChangedEvent {
        screen: state.screen,
        notification_visible: state.notification_visible,
    };

    let _ = app_handle.emit("navigation-changed", payload);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tauri::Listener;

    use super::*;

    fn paused_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .expect("failed to build test runtime")
    }

    fn count_events(app: &tauri::App<tauri::test::MockRuntime>, event: &str) -> Arc<AtomicUsize> {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();
        app.listen(event, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        counter
    }

    #[test]
    fn notification_auto_hides_after_the_delay() {
        let app = tauri::test::mock_app();
        let controller = NavigationController::new(app.handle().clone());
        let rt = paused_runtime();

        rt.block_on(async {
            controller.flash_notification().await;
            assert!(controller.get_state().await.notification_visible);

            time::sleep(Duration::from_millis(1900)).await;
            assert!(controller.get_state().await.notification_visible);

            time::sleep(Duration::from_millis(200)).await;
            assert!(!controller.get_state().await.notification_visible);
        });
    }

    #[test]
    fn a_second_flash_extends_visibility_without_flicker() {
        let app = tauri::test::mock_app();
        let emitted = count_events(&app, "navigation-changed");
        let controller = NavigationController::new(app.handle().clone());
        let rt = paused_runtime();

        rt.block_on(async {
            controller.flash_notification().await;
            time::sleep(Duration::from_millis(1500)).await;
            controller.flash_notification().await;

            // The first hide would land here; its generation is stale.
            time::sleep(Duration::from_millis(600)).await;
            assert!(controller.get_state().await.notification_visible);

            time::sleep(Duration::from_millis(1500)).await;
            assert!(!controller.get_state().await.notification_visible);
        });

        // show, show, one hide. A flicker would add a fourth event.
        assert_eq!(emitted.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn navigate_emits_only_on_actual_screen_changes() {
        let app = tauri::test::mock_app();
        let emitted = count_events(&app, "navigation-changed");
        let controller = NavigationController::new(app.handle().clone());
        let rt = paused_runtime();

        rt.block_on(async {
            let unchanged = controller.navigate(Screen::Welcome).await;
            assert_eq!(unchanged.screen, Screen::Welcome);
            assert_eq!(emitted.load(Ordering::SeqCst), 0);

            let changed = controller.navigate(Screen::Swipe).await;
            assert_eq!(changed.screen, Screen::Swipe);
            assert_eq!(emitted.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn navigation_leaves_the_notification_untouched() {
        let app = tauri::test::mock_app();
        let controller = NavigationController::new(app.handle().clone());
        let rt = paused_runtime();

        rt.block_on(async {
            controller.flash_notification().await;
            controller.navigate(Screen::Favorites).await;

            let state = controller.get_state().await;
            assert_eq!(state.screen, Screen::Favorites);
            assert!(state.notification_visible);
        });
    }
}
