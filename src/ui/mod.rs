//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the per-frame bundles computed by the app layer and
//! turns them into cells on the terminal.  No animation state lives here.

pub mod frame;
pub mod hero;
pub mod layout;
pub mod marquee;
pub mod page_view;
pub mod paint;
pub mod phone_track;
pub mod popup;
pub mod status;
pub mod theme;
