//! Headless chat widget.
//!
//! DESIGN
//! ======
//! The widget is a plain state machine plus one outbound HTTP call. Hosts
//! (a terminal, a GUI, a test) drive it through [`widget::ChatWidget`] and
//! render [`view::WidgetView`]; nothing here depends on a UI framework.

pub mod config;
pub mod net;
pub mod state;
pub mod view;
pub mod widget;

pub use config::WidgetConfig;
pub use widget::{ChatWidget, SendOutcome, SubmitTrigger};
