//! Cross-platform plumbing shared by every screen: configuration, errors,
//! formatting, timing, animation and the navigation state machine.

pub mod animation;
pub mod config;
pub mod error;
pub mod format;
pub mod platform;
pub mod state;
pub mod timing;
