//! Modal visibility state
//!
//! Tracks which single UI modal (if any) is open. State is "one open
//! modal, or none", so the at-most-one-open invariant holds structurally
//! instead of relying on every caller to reset a set of booleans.

use std::fmt;

/// The modals the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    /// The create-weapon form overlay
    CreateWeapon,
    /// The update-nickname form overlay
    UpdateNickname,
}

impl Modal {
    /// Returns the camelCase token used by the UI layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateWeapon => "createWeapon",
            Self::UpdateNickname => "updateNickname",
        }
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Modal visibility store for one UI session.
///
/// Plain in-memory state under a single owner; all mutations are
/// synchronous. No persistence, no external effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStore {
    open: Option<Modal>,
}

impl ModalStore {
    /// Create a store with every modal closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `modal`, closing whatever was open before.
    pub fn open(&mut self, modal: Modal) {
        self.open = Some(modal);
    }

    /// Close `modal` if it is the open one; any other open modal is left
    /// untouched.
    pub fn close(&mut self, modal: Modal) {
        if self.open == Some(modal) {
            self.open = None;
        }
    }

    /// Close whatever is open.
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Open `modal` if it was closed; close everything if it was the open
    /// one.
    pub fn toggle(&mut self, modal: Modal) {
        if self.open == Some(modal) {
            self.open = None;
        } else {
            self.open = Some(modal);
        }
    }

    /// Returns true if `modal` is the open one.
    pub fn is_open(&self, modal: Modal) -> bool {
        self.open == Some(modal)
    }

    /// Returns the open modal, if any.
    pub fn active(&self) -> Option<Modal> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_closed() {
        let store = ModalStore::new();
        assert_eq!(store.active(), None);
        assert!(!store.is_open(Modal::CreateWeapon));
        assert!(!store.is_open(Modal::UpdateNickname));
    }

    #[test]
    fn open_replaces_previous_modal() {
        let mut store = ModalStore::new();
        store.open(Modal::CreateWeapon);
        store.open(Modal::UpdateNickname);
        assert!(!store.is_open(Modal::CreateWeapon));
        assert!(store.is_open(Modal::UpdateNickname));
        assert_eq!(store.active(), Some(Modal::UpdateNickname));
    }

    #[test]
    fn close_only_affects_the_named_modal() {
        let mut store = ModalStore::new();
        store.open(Modal::UpdateNickname);
        store.close(Modal::CreateWeapon);
        assert!(store.is_open(Modal::UpdateNickname));
        store.close(Modal::UpdateNickname);
        assert_eq!(store.active(), None);
    }

    #[test]
    fn toggle_twice_ends_all_closed() {
        let mut store = ModalStore::new();
        store.toggle(Modal::CreateWeapon);
        assert!(store.is_open(Modal::CreateWeapon));
        store.toggle(Modal::CreateWeapon);
        assert_eq!(store.active(), None);
    }

    #[test]
    fn toggle_from_other_modal_switches() {
        let mut store = ModalStore::new();
        store.open(Modal::CreateWeapon);
        store.toggle(Modal::UpdateNickname);
        assert!(store.is_open(Modal::UpdateNickname));
        assert!(!store.is_open(Modal::CreateWeapon));
    }

    #[test]
    fn close_all() {
        let mut store = ModalStore::new();
        store.open(Modal::CreateWeapon);
        store.close_all();
        assert_eq!(store.active(), None);
    }

    #[test]
    fn tokens_match_the_ui_layer() {
        assert_eq!(Modal::CreateWeapon.as_str(), "createWeapon");
        assert_eq!(Modal::UpdateNickname.as_str(), "updateNickname");
    }
}
