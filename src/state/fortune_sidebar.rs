use super::edit_session::EditSession;
use crate::fortunes::FortuneList;

/// What closed an open edit session with its text kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    /// Enter pressed in the input
    Enter,
    /// Input lost focus (only commits when the text changed)
    Blur,
    /// Save control clicked
    SaveButton,
}

/// A committed edit: button `index` now reads `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub index: usize,
    pub text: String,
}

/// Fortune texts plus the edit session over them
///
/// Holds no view or storage; `SidebarController` applies the results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FortuneSidebar {
    fortunes: FortuneList,
    session: EditSession,
    /// Set by Escape so the blur that follows does not commit
    suppress_next_commit: bool,
}

impl FortuneSidebar {
    pub fn new(fortunes: FortuneList) -> Self {
        Self {
            fortunes,
            ..Default::default()
        }
    }

    pub fn fortunes(&self) -> &[String] {
        &self.fortunes
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Index of the button being edited
    pub fn editing(&self) -> Option<usize> {
        self.session.index()
    }

    /// Replace all fortunes, closing any open session
    pub fn replace(&mut self, fortunes: FortuneList) {
        self.fortunes = fortunes;
        self.session = EditSession::Closed;
        self.suppress_next_commit = false;
    }

    /// Bind the input to button `index`
    ///
    /// Returns the prefill text, or `None` if there is no such button.
    /// An already open session is dropped without committing.
    pub fn open(&mut self, index: usize) -> Option<&str> {
        let text = self.fortunes.get(index)?;
        self.session = EditSession::open(index, text.clone());
        self.suppress_next_commit = false;
        self.session.draft()
    }

    /// Track the input text. Ignored while closed.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditSession::Open { draft, .. } = &mut self.session {
            *draft = text.into();
        }
    }

    /// Close the session keeping the draft
    ///
    /// A blur commits only when the draft changed and no Escape preceded it.
    pub fn commit(&mut self, trigger: CommitTrigger) -> Option<Commit> {
        if trigger == CommitTrigger::Blur {
            if self.suppress_next_commit {
                self.suppress_next_commit = false;
                tracing::debug!("Blur after Escape, not committing");
                return None;
            }
            if !self.session.is_changed() {
                return None;
            }
        }

        match std::mem::take(&mut self.session) {
            EditSession::Open { index, draft, .. } => {
                self.fortunes[index] = draft.clone();
                Some(Commit { index, text: draft })
            }
            EditSession::Closed => None,
        }
    }

    /// Close the session discarding the draft
    ///
    /// Returns `true` if a session was open.
    pub fn cancel(&mut self) -> bool {
        if !self.session.is_open() {
            return false;
        }
        self.session = EditSession::Closed;
        self.suppress_next_commit = true;
        true
    }
}
