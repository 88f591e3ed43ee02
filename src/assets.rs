/// Stylesheet injected into the window head
pub const MAIN_STYLE: &str = include_str!("../assets/main.css");
