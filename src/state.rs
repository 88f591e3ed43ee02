// State module - manages the fortune sidebar state

mod controller;
mod edit_session;
mod fortune_sidebar;
mod layout;
mod view;

pub use controller::SidebarController;
pub use layout::button_layouts;
pub use view::SignalView;
