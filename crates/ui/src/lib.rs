//! Knights UI state: modal visibility tracking.

mod modal;

pub use modal::{Modal, ModalStore};
