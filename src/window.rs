use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

use crate::assets::MAIN_STYLE;

const DEFAULT_WINDOW_SIZE: LogicalSize<u32> = LogicalSize {
    width: 960,
    height: 720,
};

/// Create the window config
pub fn create_main_window_config() -> Config {
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Fortune Teller")
                .with_inner_size(DEFAULT_WINDOW_SIZE),
        )
        // Inline the style so the first paint is already styled
        .with_custom_head(format!("<style>{MAIN_STYLE}</style>"))
}
