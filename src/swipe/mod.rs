pub mod commands;
pub mod controller;
pub mod gesture;
pub mod state;

pub use controller::{SwipeController, SwipeSnapshot};
pub use state::{SwipeDirection, SwipeState};
