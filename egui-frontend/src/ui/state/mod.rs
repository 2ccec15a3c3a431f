//! # UI State Module
//!
//! Sub-state structs composed into the main application state:
//! - `modal_state` - Modal visibility flags and editing targets
//! - `form_state` - Input buffers for the configuration dialogs
//! - `message_state` - Success/error messages with timed expiry

pub mod form_state;
pub mod message_state;
pub mod modal_state;

pub use form_state::*;
pub use message_state::*;
pub use modal_state::*;
