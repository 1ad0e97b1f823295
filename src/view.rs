//! Render-ready projection of widget state.
//!
//! The widget decides *what* is on screen (launcher, lead form, or chat
//! panel); hosts decide how it looks. `Display` gives a plain-text rendering
//! used by the terminal host.

use std::fmt;

use crate::state::chat::{ChatMessage, Role};
use crate::state::lead::LeadField;
use crate::widget::WidgetState;

pub const PANEL_TITLE: &str = "Asistente Virtual";
pub const INPUT_PLACEHOLDER: &str = "Haz una pregunta...";
pub const SEND_LABEL: &str = "Enviar";
pub const TYPING_LABEL: &str = "Escribiendo...";
pub const LEAD_SUBMIT_LABEL: &str = "Comenzar chat";
pub const CONTACT_LABEL: &str = "Contáctanos por WhatsApp";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetView {
    /// Closed widget: only the launcher button.
    Launcher,
    /// Open widget waiting for lead data.
    LeadForm(LeadFormView),
    /// Open widget with the conversation.
    Panel(PanelView),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadFormView {
    pub title: &'static str,
    /// `(field, current value)` in display order.
    pub fields: Vec<(LeadField, String)>,
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub title: &'static str,
    pub messages: Vec<ChatMessage>,
    /// Show the typing indicator below the transcript.
    pub typing: bool,
    pub placeholder: &'static str,
    pub send_label: &'static str,
    pub contact_url: Option<String>,
}

impl WidgetView {
    #[must_use]
    pub fn from_state(state: &WidgetState, contact_url: Option<&str>) -> Self {
        if !state.ui.visibility.is_open() {
            return Self::Launcher;
        }
        if !state.chat_enabled() {
            return Self::LeadForm(LeadFormView {
                title: PANEL_TITLE,
                fields: vec![
                    (LeadField::Name, state.lead.name.clone()),
                    (LeadField::Email, state.lead.email.clone()),
                    (LeadField::MemberNumber, state.lead.member_number.clone()),
                ],
                submit_label: LEAD_SUBMIT_LABEL,
            });
        }
        Self::Panel(PanelView {
            title: PANEL_TITLE,
            messages: state.chat.messages.clone(),
            typing: state.chat.loading(),
            placeholder: INPUT_PLACEHOLDER,
            send_label: SEND_LABEL,
            contact_url: contact_url.map(str::to_string),
        })
    }
}

impl fmt::Display for WidgetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launcher => writeln!(f, "[💬]"),
            Self::LeadForm(form) => {
                writeln!(f, "== {} ==", form.title)?;
                for (field, value) in &form.fields {
                    writeln!(f, "{}: {value}", field.label())?;
                }
                writeln!(f, "[{}]", form.submit_label)
            }
            Self::Panel(panel) => {
                writeln!(f, "== {} ==", panel.title)?;
                for message in &panel.messages {
                    match message.role {
                        Role::User => writeln!(f, "> {}", message.content)?,
                        Role::Assistant => writeln!(f, "< {}", message.content)?,
                    }
                }
                if panel.typing {
                    writeln!(f, "{TYPING_LABEL}")?;
                }
                if let Some(url) = &panel.contact_url {
                    writeln!(f, "{CONTACT_LABEL}: {url}")?;
                }
                writeln!(f, "[{}] [{}]", panel.placeholder, panel.send_label)
            }
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
