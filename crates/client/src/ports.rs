//! Outbound port for the knights backend.

use async_trait::async_trait;
use knights_domain::{Knight, KnightId, Nickname, Weapon};

use crate::error::ApiError;

/// The backend operations the UI flows need.
///
/// Request and response bodies are the validated domain shapes; callers
/// run a creation schema before reaching for this port. Ordering between
/// concurrent requests is the caller's responsibility.
#[async_trait]
pub trait KnightsApi {
    /// Fetch all knights (the backend filters soft-deleted ones).
    async fn list_knights(&self) -> Result<Vec<Knight>, ApiError>;

    /// Fetch a single knight by id.
    async fn get_knight(&self, id: KnightId) -> Result<Knight, ApiError>;

    /// Persist a newly validated knight.
    async fn create_knight(&self, knight: &Knight) -> Result<Knight, ApiError>;

    /// Replace a knight's nickname.
    async fn update_nickname(&self, id: KnightId, nickname: &Nickname)
        -> Result<Knight, ApiError>;

    /// Soft-delete a knight (the backend sets the flag and timestamp).
    async fn delete_knight(&self, id: KnightId) -> Result<(), ApiError>;

    /// Add a validated weapon to a knight's list.
    async fn add_weapon(&self, id: KnightId, weapon: &Weapon) -> Result<Knight, ApiError>;
}
