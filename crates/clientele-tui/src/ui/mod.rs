//! Terminal UI module using ratatui.
//!
//! - `render`: Draws the login form from application state
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling

pub mod input;
pub mod render;
pub mod styles;
