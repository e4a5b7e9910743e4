use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Welcome,
    Swipe,
    Favorites,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Welcome
    }
}

/// Which screen is active plus the transient like-notification flag.
///
/// `notification_generation` is bumped on every show; a scheduled auto-hide
/// carries the generation it was scheduled for and only applies if no newer
/// show happened in the interim (last write wins).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub screen: Screen,
    pub notification_visible: bool,
    #[serde(skip)]
    pub notification_generation: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            screen: Screen::Welcome,
            notification_visible: false,
            notification_generation: 0,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to `screen`. Returns false (and changes nothing) when `screen`
    /// is already active.
    pub fn navigate(&mut self, screen: Screen) -> bool {
        if self.screen == screen {
            return false;
        }
        self.screen = screen;
        true
    }

    /// Shows the notification and returns the generation its auto-hide
    /// must present to take effect.
    pub fn show_notification(&mut self) -> u64 {
        self.notification_visible = true;
        self.notification_generation += 1;
        self.notification_generation
    }

    /// Hides the notification if `generation` is still current. Returns
    /// whether visibility actually changed.
    pub fn auto_hide(&mut self, generation: u64) -> bool {
        if generation != self.notification_generation || !self.notification_visible {
            return false;
        }
        self.notification_visible = false;
        true
    }
}
