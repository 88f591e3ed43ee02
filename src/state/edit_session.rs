/// The shared input box, either hidden or bound to one sidebar button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        index: usize,
        /// Current input text
        draft: String,
        /// Button text when the session was opened
        original: String,
    },
}

impl EditSession {
    pub fn open(index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self::Open {
            index,
            draft: text.clone(),
            original: text,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Index of the button being edited
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index, .. } => Some(*index),
            Self::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// Whether the draft differs from the text the session started with
    pub fn is_changed(&self) -> bool {
        match self {
            Self::Open {
                draft, original, ..
            } => draft != original,
            Self::Closed => false,
        }
    }
}
