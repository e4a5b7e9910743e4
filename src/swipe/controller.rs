use std::{sync::Arc, time::Duration};

use log::{error, info, warn};
use serde::Serialize;
use tauri::{AppHandle, Emitter, Runtime};
use tokio::{sync::Mutex, time};

use crate::{
    catalog::{Activity, Catalog},
    favorites::{FavoritesChangedEvent, FavoritesStore},
    navigation::NavigationController,
};

use super::{gesture, SwipeDirection, SwipeState};

pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Everything the swipe screen renders: the raw state plus the current and
/// upcoming cards (the upcoming one backs the stacked-card preview) and the
/// counters for the progress header and favorites badge.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SwipeSnapshot {
    pub state: SwipeState,
    pub current_activity: Option<Activity>,
    pub next_activity: Option<Activity>,
    pub exhausted: bool,
    pub position: usize,
    pub total: usize,
    pub favorites_count: usize,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct SwipeStateChangedEvent {
    state: SwipeState,
    exhausted: bool,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct ActivityLikedEvent {
    activity: Activity,
    favorites_count: usize,
}

pub struct SwipeController<R: Runtime> {
    state: Arc<Mutex<SwipeState>>,
    catalog: Arc<Catalog>,
    favorites: FavoritesStore,
    navigation: NavigationController<R>,
    app_handle: AppHandle<R>,
    settle_delay: Duration,
}

impl<R: Runtime> SwipeController<R> {
    pub fn new(
        app_handle: AppHandle<R>,
        catalog: Arc<Catalog>,
        favorites: FavoritesStore,
        navigation: NavigationController<R>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(SwipeState::new())),
            catalog,
            favorites,
            navigation,
            app_handle,
            settle_delay: SETTLE_DELAY,
        }
    }

    pub async fn get_snapshot(&self) -> SwipeSnapshot {
        let state = self.state.lock().await.clone();
        self.snapshot_from(state).await
    }

    /// Commits a swipe on the current card. While a commit is settling, or
    /// once the catalog is exhausted, the call is an ignorable command and
    /// returns the unchanged snapshot.
    ///
    /// A right swipe appends to the favorites store and fires exactly one
    /// `activity-liked` before the settle delay starts; the cursor itself
    /// only advances when the settle task runs.
    pub async fn commit(&self, direction: SwipeDirection) -> SwipeSnapshot {
        let len = self.catalog.len();

        let begun = {
            let mut guard = self.state.lock().await;
            if guard.begin_commit(direction, len) {
                emit_swipe_state(&self.app_handle, &guard, len);
                Some((guard.generation, guard.cursor))
            } else {
                None
            }
        };

        let (generation, cursor) = match begun {
            Some(begun) => begun,
            None => {
                let snapshot = self.get_snapshot().await;
                if snapshot.exhausted {
                    warn!("Ignored {direction:?} swipe; catalog is exhausted");
                }
                return snapshot;
            }
        };

        info!("Swipe {direction:?} committed at position {cursor}");

        if direction == SwipeDirection::Right {
            if let Some(activity) = self.catalog.get(cursor) {
                let favorites_count = self.favorites.add(activity.clone()).await;
                self.navigation.flash_notification().await;

                let liked = ActivityLikedEvent {
                    activity: activity.clone(),
                    favorites_count,
                };
                if let Err(err) = self.app_handle.emit("activity-liked", liked) {
                    error!("Failed to emit activity-liked: {err}");
                }

                let changed = FavoritesChangedEvent {
                    count: favorites_count,
                };
                let _ = self.app_handle.emit("favorites-changed", changed);
            }
        }

        self.spawn_settle(generation, len);

        self.get_snapshot().await
    }

    /// Applies the gesture policy to a finished drag and commits when a
    /// threshold was crossed. An abandoned drag changes nothing.
    pub async fn drag_end(&self, offset_x: f64, velocity_x: f64) -> SwipeSnapshot {
        match gesture::interpret_drag(offset_x, velocity_x) {
            Some(direction) => self.commit(direction).await,
            None => self.get_snapshot().await,
        }
    }

    /// Steps back to the previous card. Favorite membership is untouched;
    /// undoing a liked card does not unlike it.
    pub async fn undo(&self) -> SwipeSnapshot {
        {
            let mut guard = self.state.lock().await;
            if guard.undo() {
                info!("Undo to position {}", guard.cursor);
                emit_swipe_state(&self.app_handle, &guard, self.catalog.len());
            }
        }

        self.get_snapshot().await
    }

    /// Resets browsing to the first card. The generation bump strands any
    /// settle task still waiting out its delay.
    pub async fn restart(&self) -> SwipeSnapshot {
        {
            let mut guard = self.state.lock().await;
            guard.restart();
            info!("Swipe deck restarted");
            emit_swipe_state(&self.app_handle, &guard, self.catalog.len());
        }

        self.get_snapshot().await
    }

    fn spawn_settle(&self, generation: u64, len: usize) {
        let state = self.state.clone();
        let app_handle = self.app_handle.clone();
        let delay = self.settle_delay;

        tokio::spawn(async move {
            time::sleep(delay).await;
            let mut guard = state.lock().await;
            if guard.settle(generation, len) {
                emit_swipe_state(&app_handle, &guard, len);
            }
        });
    }

    async fn snapshot_from(&self, state: SwipeState) -> SwipeSnapshot {
        let total = self.catalog.len();

        SwipeSnapshot {
            current_activity: self.catalog.get(state.cursor).cloned(),
            next_activity: self.catalog.get(state.cursor + 1).cloned(),
            exhausted: state.is_exhausted(total),
            position: (state.cursor + 1).min(total),
            total,
            favorites_count: self.favorites.count().await,
            state,
        }
    }
}

impl<R: Runtime> Clone for SwipeController<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            catalog: Arc::clone(&self.catalog),
            favorites: self.favorites.clone(),
            navigation: self.navigation.clone(),
            app_handle: self.app_handle.clone(),
            settle_delay: self.settle_delay,
        }
    }
}

fn emit_swipe_state<R: Runtime>(app_handle: &AppHandle<R>, state: &SwipeState, len: usize) {
    let payload = SwipeStateChangedEvent {
        exhausted: state.is_exhausted(len),
        state: state.clone(),
    };

    let _ = app_handle.emit("swipe-state-changed", payload);
}
