//! State management module
//!
//! This module handles all gallery state, including:
//! - Shared data structures (data.rs)
//! - The ordered file collection (collection.rs)
//! - Selection and zoom cursors (selection.rs)
//! - Navigation handoff payloads (handoff.rs)
//! - The session that keeps all of the above consistent (session.rs)

pub mod collection;
pub mod data;
pub mod handoff;
pub mod selection;
pub mod session;
