// API module - HTTP endpoints

pub mod dashboard;
pub mod health;
pub mod roster;
pub mod scan;

use crate::config::Config;
use crate::roster::SharedRoster;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: SharedRoster,
    pub config: Config,
}
