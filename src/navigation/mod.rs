pub mod commands;
pub mod controller;
pub mod state;

pub use controller::NavigationController;
pub use state::{NavigationState, Screen};
