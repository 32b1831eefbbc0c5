//! UI module
//!
//! - `gallery.rs` - tile grid, zoomed view and the upload/action section
//! - `viewer.rs` - the solution / check-solution screens
//! - `outside.rs` - collapses the zoom on presses outside the zoomed item

pub mod gallery;
pub mod outside;
pub mod viewer;
