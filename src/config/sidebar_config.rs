use serde::{Deserialize, Serialize};

/// Default sidebar button height in pixels
pub const DEFAULT_BUTTON_HEIGHT: f64 = 73.0;

fn default_button_height() -> f64 {
    DEFAULT_BUTTON_HEIGHT
}

/// Configuration for sidebar layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    /// Vertical distance between consecutive fortune buttons
    #[serde(default = "default_button_height")]
    pub button_height: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            button_height: default_button_height(),
        }
    }
}
