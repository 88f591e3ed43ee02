use super::fortune_sidebar::{CommitTrigger, FortuneSidebar};
use super::view::SidebarView;
use crate::fortunes::{FortuneList, FortuneStorage, Storage};

/// Routes UI events through `FortuneSidebar` and applies the results to the
/// view and storage
#[derive(Debug)]
pub struct SidebarController<V, S> {
    sidebar: FortuneSidebar,
    view: V,
    storage: FortuneStorage<S>,
}

impl<V: SidebarView, S: Storage> SidebarController<V, S> {
    pub fn new(view: V, storage: FortuneStorage<S>) -> Self {
        Self {
            sidebar: FortuneSidebar::default(),
            view,
            storage,
        }
    }

    #[cfg(test)]
    pub fn sidebar(&self) -> &FortuneSidebar {
        &self.sidebar
    }

    /// Show one button per fortune
    pub fn render(&mut self, fortunes: FortuneList) {
        tracing::debug!(count = fortunes.len(), "Rendering sidebar buttons");
        self.view.replace_buttons(&fortunes);
        self.view.hide_editor();
        self.sidebar.replace(fortunes);
    }

    pub fn click_button(&mut self, index: usize) {
        match self.sidebar.open(index) {
            Some(prefill) => {
                self.view.show_editor(prefill);
                tracing::debug!(index, "Opened fortune input");
            }
            None => tracing::debug!(index, "Click on unknown button ignored"),
        }
    }

    /// Typed text in the input
    pub fn input(&mut self, text: String) {
        if self.sidebar.session().is_open() {
            self.view.update_editor(&text);
            self.sidebar.set_draft(text);
        }
    }

    /// Enter in the input
    pub fn press_enter(&mut self) {
        self.commit(CommitTrigger::Enter);
    }

    /// Escape anywhere in the window
    pub fn press_escape(&mut self) {
        let index = self.sidebar.editing();
        if self.sidebar.cancel() {
            tracing::debug!(?index, "Fortune input cancelled");
            self.view.hide_editor();
        }
    }

    /// Input lost focus
    pub fn blur(&mut self) {
        self.commit(CommitTrigger::Blur);
    }

    pub fn click_save(&mut self) {
        self.commit(CommitTrigger::SaveButton);
    }

    fn commit(&mut self, trigger: CommitTrigger) {
        let Some(commit) = self.sidebar.commit(trigger) else {
            return;
        };
        tracing::debug!(index = commit.index, ?trigger, "Committing fortune");

        self.view.set_button_text(commit.index, &commit.text);
        self.view.hide_editor();

        let texts = self.view.list_buttons();
        debug_assert_eq!(texts, self.sidebar.fortunes());
        self.storage.save(&texts);
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortunes::MemoryStorage;

    /// In-memory stand-in for the rendered sidebar
    #[derive(Debug, Default)]
    struct FakeView {
        buttons: Vec<String>,
        editor: Option<String>,
        replace_calls: usize,
    }

    impl SidebarView for FakeView {
        fn replace_buttons(&mut self, texts: &[String]) {
            self.buttons = texts.to_vec();
            self.replace_calls += 1;
        }

        fn list_buttons(&self) -> Vec<String> {
            self.buttons.clone()
        }

        fn set_button_text(&mut self, index: usize, text: &str) {
            self.buttons[index] = text.to_string();
        }

        fn show_editor(&mut self, prefill: &str) {
            self.editor = Some(prefill.to_string());
        }

        fn update_editor(&mut self, text: &str) {
            if self.editor.is_some() {
                self.editor = Some(text.to_string());
            }
        }

        fn hide_editor(&mut self) {
            self.editor = None;
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn controller(items: &[&str]) -> (SidebarController<FakeView, MemoryStorage>, MemoryStorage) {
        let memory = MemoryStorage::default();
        let storage = FortuneStorage::new(memory.clone(), "fortune");
        let mut controller = SidebarController::new(FakeView::default(), storage);
        controller.render(strings(items));
        (controller, memory)
    }

    fn stored(memory: &MemoryStorage) -> Option<Vec<String>> {
        memory
            .get_item("fortune")
            .map(|value| serde_json::from_str(&value).unwrap())
    }

    #[test]
    fn test_render_creates_buttons_in_order() {
        let (controller, memory) = controller(&["first", "second", "third"]);

        assert_eq!(controller.view().buttons, strings(&["first", "second", "third"]));
        assert_eq!(controller.view().editor, None);
        assert_eq!(controller.sidebar().fortunes(), ["first", "second", "third"]);
        // Rendering alone never persists
        assert_eq!(stored(&memory), None);
    }

    #[test]
    fn test_render_replaces_previous_buttons() {
        let (mut controller, _) = controller(&["a", "b", "c"]);
        controller.render(strings(&["z"]));

        assert_eq!(controller.view().buttons, strings(&["z"]));
        assert_eq!(controller.view().replace_calls, 2);
    }

    #[test]
    fn test_click_prefills_exact_text() {
        let (mut controller, _) = controller(&["a", "  Keep  my spacing "]);

        controller.click_button(1);

        assert_eq!(controller.view().editor.as_deref(), Some("  Keep  my spacing "));
        assert_eq!(controller.sidebar().editing(), Some(1));
    }

    #[test]
    fn test_click_unknown_button_keeps_editor_hidden() {
        let (mut controller, _) = controller(&["a"]);

        controller.click_button(5);

        assert_eq!(controller.view().editor, None);
        assert_eq!(controller.sidebar().editing(), None);
    }

    #[test]
    fn test_enter_commits_and_persists_full_list() {
        let (mut controller, memory) = controller(&["a", "b", "c"]);

        controller.click_button(1);
        controller.input("X".to_string());
        controller.press_enter();

        assert_eq!(controller.view().buttons, strings(&["a", "X", "c"]));
        assert_eq!(controller.view().editor, None);
        assert_eq!(controller.sidebar().editing(), None);
        assert_eq!(stored(&memory), Some(strings(&["a", "X", "c"])));
    }

    #[test]
    fn test_save_button_commits() {
        let (mut controller, memory) = controller(&["a", "b"]);

        controller.click_button(0);
        controller.input("saved".to_string());
        controller.click_save();

        assert_eq!(controller.view().buttons, strings(&["saved", "b"]));
        assert_eq!(stored(&memory), Some(strings(&["saved", "b"])));
    }

    #[test]
    fn test_blur_after_change_commits() {
        let (mut controller, memory) = controller(&["a", "b"]);

        controller.click_button(1);
        controller.input("changed".to_string());
        controller.blur();

        assert_eq!(controller.view().buttons, strings(&["a", "changed"]));
        assert_eq!(stored(&memory), Some(strings(&["a", "changed"])));
    }

    #[test]
    fn test_blur_without_change_keeps_editor_open() {
        let (mut controller, memory) = controller(&["a"]);

        controller.click_button(0);
        controller.blur();

        assert_eq!(controller.view().editor.as_deref(), Some("a"));
        assert_eq!(stored(&memory), None);
    }

    #[test]
    fn test_input_mirrors_into_editor() {
        let (mut controller, _) = controller(&["a"]);

        controller.click_button(0);
        controller.input("typing".to_string());

        assert_eq!(controller.view().editor.as_deref(), Some("typing"));
        // Buttons only change on commit
        assert_eq!(controller.view().buttons, strings(&["a"]));
    }

    #[test]
    fn test_input_while_closed_is_ignored() {
        let (mut controller, _) = controller(&["a"]);

        controller.input("stray".to_string());
        controller.press_enter();

        assert_eq!(controller.view().editor, None);
        assert_eq!(controller.view().buttons, strings(&["a"]));
    }

    #[test]
    fn test_escape_discards_and_following_blur_does_not_commit() {
        let (mut controller, memory) = controller(&["a", "b"]);

        controller.click_button(0);
        controller.input("discarded".to_string());
        controller.press_escape();

        assert_eq!(controller.view().editor, None);
        assert_eq!(controller.view().buttons, strings(&["a", "b"]));

        controller.blur();

        assert_eq!(controller.view().buttons, strings(&["a", "b"]));
        assert_eq!(controller.sidebar().fortunes(), ["a", "b"]);
        assert_eq!(stored(&memory), None);
    }

    #[test]
    fn test_edits_accumulate_in_storage() {
        let (mut controller, memory) = controller(&["a", "b", "c"]);

        controller.click_button(0);
        controller.input("first".to_string());
        controller.press_enter();

        controller.click_button(2);
        controller.input("".to_string());
        controller.click_save();

        assert_eq!(stored(&memory), Some(strings(&["first", "b", ""])));
    }

    #[test]
    fn test_committed_edit_survives_reload() {
        let (mut controller, memory) = controller(&["a", "b"]);
        controller.click_button(1);
        controller.input("persisted".to_string());
        controller.press_enter();

        let reloaded = FortuneStorage::new(memory, "fortune").load();
        assert_eq!(reloaded, strings(&["a", "persisted"]));
    }
}
