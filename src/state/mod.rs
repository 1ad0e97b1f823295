//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `lead`, `chat`) so each piece stays a
//! small plain model. The `widget` module composes them and owns mutation.

pub mod chat;
pub mod lead;
pub mod ui;
