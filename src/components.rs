pub mod app;
pub mod fortune_input_box;
pub mod sidebar;
