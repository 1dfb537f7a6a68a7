//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! board manager and the quick-reply book each sit behind their own
//! `RwLock`; a mutating handler holds the write lock for exactly one
//! manager call, so operations are serialized and never interleave.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::manager::BoardManager;
use crate::services::quick_reply::QuickReplyBook;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<BoardManager>>,
    pub quick_replies: Arc<RwLock<QuickReplyBook>>,
}

impl AppState {
    #[must_use]
    pub fn new(board: BoardManager) -> Self {
        Self { board: Arc::new(RwLock::new(board)), quick_replies: Arc::new(RwLock::new(QuickReplyBook::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
