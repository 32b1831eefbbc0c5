//! School Killer
//!
//! Collect photos of schoolwork, pick exactly one, and open it in the
//! solution or check-solution viewer.
//!
//! - `state` - the file collection, selection/zoom cursors and session
//! - `media` - file intake and transient image references
//! - `ui` - gallery, viewers and the outside-press detector
//! - `app` - the iced application tying it together

pub mod app;
pub mod config;
pub mod error;
pub mod locale;
pub mod media;
pub mod state;
pub mod ui;

pub use error::{AppError, SessionError};
