use dioxus::prelude::*;

/// The rendered surface the sidebar drives
///
/// Buttons are addressed by position. The editor is the single shared input
/// box; `None` text means it is hidden.
pub trait SidebarView {
    /// Drop existing buttons and create one per text, in order
    fn replace_buttons(&mut self, texts: &[String]);
    fn list_buttons(&self) -> Vec<String>;
    fn set_button_text(&mut self, index: usize, text: &str);
    /// Make the input visible holding `prefill`
    fn show_editor(&mut self, prefill: &str);
    /// Mirror typed text into the visible input
    fn update_editor(&mut self, text: &str);
    /// Hide the input and clear its text
    fn hide_editor(&mut self);
}

/// View backed by Dioxus signals, read by the sidebar components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalView {
    pub buttons: Signal<Vec<String>>,
    pub editor: Signal<Option<String>>,
}

impl SignalView {
    /// Create the signals in the current scope
    pub fn new() -> Self {
        Self {
            buttons: Signal::new(Vec::new()),
            editor: Signal::new(None),
        }
    }
}

impl SidebarView for SignalView {
    fn replace_buttons(&mut self, texts: &[String]) {
        self.buttons.set(texts.to_vec());
    }

    fn list_buttons(&self) -> Vec<String> {
        self.buttons.peek().to_vec()
    }

    fn set_button_text(&mut self, index: usize, text: &str) {
        if let Some(button) = self.buttons.write().get_mut(index) {
            *button = text.to_string();
        }
    }

    fn show_editor(&mut self, prefill: &str) {
        self.editor.set(Some(prefill.to_string()));
    }

    fn update_editor(&mut self, text: &str) {
        if self.editor.peek().is_some() {
            self.editor.set(Some(text.to_string()));
        }
    }

    fn hide_editor(&mut self) {
        self.editor.set(None);
    }
}
