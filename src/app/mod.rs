//! Application orchestration — state management, event loop, and input handling.

pub mod controller;
pub mod event;
pub mod handler;
pub mod page;
pub mod settings;
pub mod state;
