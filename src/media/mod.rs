//! Media handling module
//!
//! This module handles:
//! - Reading picked or dropped files into entries (intake.rs)
//! - Minting and revoking drawable image references (reference.rs)

pub mod intake;
pub mod reference;
