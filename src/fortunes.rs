//! Fortune list loading and persistence.
//!
//! - `storage`: key/value storage and the `FortuneStorage` gateway
//! - `remote`: the published fortune document
//! - `loader`: storage, then network, then the fallback list

mod loader;
mod remote;
mod storage;

pub use loader::FortuneLoader;
pub use remote::RemoteFortunes;
pub use storage::{FortuneStorage, LocalStorage, Storage};

#[cfg(test)]
pub use storage::MemoryStorage;

/// Ordered fortune texts, one per sidebar button
pub type FortuneList = Vec<String>;

/// Placeholder shown when no fortunes could be loaded
pub const FALLBACK_FORTUNE: &str = "Input fortune here";

/// Number of placeholder entries in the fallback list
pub const FALLBACK_LEN: usize = 8;

/// Build the fallback list prompting the user to enter every fortune
pub fn fallback_fortunes() -> FortuneList {
    vec![FALLBACK_FORTUNE.to_string(); FALLBACK_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_fortunes() {
        let fortunes = fallback_fortunes();
        assert_eq!(fortunes.len(), 8);
        assert!(fortunes.iter().all(|f| f == "Input fortune here"));
    }
}
