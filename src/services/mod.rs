//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `manager` owns the attendant boards and the visible view; `board` and
//! `view` are its building blocks. `provider`/`seed` supply starting data.
//! Route handlers stay focused on request translation and error mapping.

pub mod board;
pub mod ids;
pub mod manager;
pub mod provider;
pub mod quick_reply;
pub mod seed;
pub mod view;
