//! Chat widget: shell, lead gate, transcript, and request dispatch.
//!
//! DESIGN
//! ======
//! All widget state lives in one `WidgetState` held by a
//! `tokio::sync::watch::Sender`. Every operation is a short synchronous
//! `send_modify`, so observers get a fresh snapshot after each change and no
//! borrow is ever held across the one await point (the backend call).
//!
//! `ChatWidget` is a cheap handle: cloning it shares the same state and
//! backend, which is how a host lets several sends be in flight at once.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping sends are not serialized or cancelled. Replies are appended in
//! arrival order, and the loading indicator stays on until the last
//! outstanding request settles.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::WidgetConfig;
use crate::net::{ChatBackend, ChatError, ChatRequest, HttpChatBackend};
use crate::state::chat::ChatState;
use crate::state::lead::{LeadField, LeadForm, LeadFormError};
use crate::state::ui::{UiState, Visibility};
use crate::view::WidgetView;

/// Appended when the endpoint answers without a usable `response`.
pub const NO_ANSWER_TEXT: &str = "No recibí una respuesta, intenta nuevamente.";
/// Appended on any transport, status, or parse failure.
pub const ERROR_TEXT: &str = "Error al obtener respuesta. Intenta más tarde.";

// =============================================================================
// STATE
// =============================================================================

/// Everything one widget instance owns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub ui: UiState,
    pub lead: LeadForm,
    pub chat: ChatState,
    pub require_lead_form: bool,
}

impl WidgetState {
    #[must_use]
    pub fn new(require_lead_form: bool) -> Self {
        Self { require_lead_form, ..Self::default() }
    }

    /// Whether the chat panel is reachable (lead gate open or not required).
    #[must_use]
    pub fn chat_enabled(&self) -> bool {
        !self.require_lead_form || self.lead.is_submitted()
    }
}

/// How the user asked to send the current input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTrigger {
    EnterKey,
    SendButton,
}

/// What a call to [`ChatWidget::send`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank question or chat not yet enabled. Nothing changed.
    Ignored,
    /// The endpoint's reply was appended.
    Answered,
    /// The endpoint answered without a reply; [`NO_ANSWER_TEXT`] was appended.
    NoAnswer,
    /// The request failed; [`ERROR_TEXT`] was appended.
    Failed,
}

// =============================================================================
// WIDGET
// =============================================================================

#[derive(Clone)]
pub struct ChatWidget {
    state: Arc<watch::Sender<WidgetState>>,
    backend: Arc<dyn ChatBackend>,
    contact_url: Option<String>,
}

impl ChatWidget {
    #[must_use]
    pub fn new(backend: Arc<dyn ChatBackend>, require_lead_form: bool) -> Self {
        let (state, _) = watch::channel(WidgetState::new(require_lead_form));
        Self { state: Arc::new(state), backend, contact_url: None }
    }

    #[must_use]
    pub fn with_contact_url(mut self, url: Option<String>) -> Self {
        self.contact_url = url;
        self
    }

    /// Build a widget talking HTTP to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, ChatError> {
        let backend = HttpChatBackend::new(config.endpoint.clone(), config.timeouts)?;
        info!(
            endpoint = %config.endpoint,
            require_lead_form = config.require_lead_form,
            "chat widget initialized"
        );
        Ok(Self::new(Arc::new(backend), config.require_lead_form).with_contact_url(config.contact_url.clone()))
    }

    /// Observe state changes. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> WidgetState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn view(&self) -> WidgetView {
        WidgetView::from_state(&self.state.borrow(), self.contact_url.as_deref())
    }

    // -------------------------------------------------------------------------
    // Shell
    // -------------------------------------------------------------------------

    /// Flip between launcher and panel. Returns the new visibility.
    pub fn toggle(&self) -> Visibility {
        let mut visibility = Visibility::Closed;
        self.state.send_modify(|s| visibility = s.ui.toggle());
        debug!(?visibility, "widget toggled");
        visibility
    }

    /// Show the panel. No-op when already open.
    pub fn open(&self) {
        self.state.send_if_modified(|s| s.ui.set_visibility(Visibility::Open));
    }

    /// Back to the launcher. No-op when already closed.
    pub fn close(&self) {
        self.state.send_if_modified(|s| s.ui.set_visibility(Visibility::Closed));
    }

    // -------------------------------------------------------------------------
    // Lead form
    // -------------------------------------------------------------------------

    /// Write a lead field. Ignored (returns `false`) once the form is submitted.
    pub fn update_field(&self, field: LeadField, value: impl Into<String>) -> bool {
        let value = value.into();
        let written = self.state.send_if_modified(|s| s.lead.update_field(field, value));
        if !written {
            debug!(?field, "lead form frozen; update ignored");
        }
        written
    }

    /// Validate and submit the lead form.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError`] when a required field is empty. The caller
    /// shows [`LeadFormError::notice`] as a blocking message.
    pub fn submit_lead_form(&self) -> Result<(), LeadFormError> {
        let mut result = Ok(());
        self.state.send_if_modified(|s| {
            let was_submitted = s.lead.is_submitted();
            result = s.lead.submit();
            !was_submitted && s.lead.is_submitted()
        });
        match &result {
            Ok(()) => info!("lead form submitted"),
            Err(e) => debug!(error = %e, "lead form rejected"),
        }
        result
    }

    // -------------------------------------------------------------------------
    // Conversation input
    // -------------------------------------------------------------------------

    /// Replace the pending input buffer.
    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|s| s.chat.input = text);
    }

    /// Key handler for the input box. Only `Enter` submits.
    pub async fn handle_key(&self, key: &str) -> SendOutcome {
        if key == "Enter" {
            self.submit_input(SubmitTrigger::EnterKey).await
        } else {
            SendOutcome::Ignored
        }
    }

    /// Send the current input buffer. Enter and the send button share this path.
    pub async fn submit_input(&self, trigger: SubmitTrigger) -> SendOutcome {
        let question = self.state.borrow().chat.input.clone();
        debug!(?trigger, "submit input");
        self.send(&question).await
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Append `question`, ask the backend, and append the reply or a fallback.
    ///
    /// Never fails: every error becomes an assistant message. The loading
    /// indicator is released on every exit path. If this future is dropped
    /// mid-request, [`ERROR_TEXT`] is appended in place of the reply.
    pub async fn send(&self, question: &str) -> SendOutcome {
        let mut member_number = None;
        let accepted = self.state.send_if_modified(|s| {
            if !s.chat_enabled() || !s.chat.append_user_message(question) {
                return false;
            }
            s.chat.begin_request();
            if s.require_lead_form {
                member_number = Some(s.lead.member_number.clone());
            }
            true
        });
        if !accepted {
            debug!("send ignored: blank question or chat not enabled");
            return SendOutcome::Ignored;
        }

        let mut pending = PendingGuard { state: &self.state, armed: true };
        let request_id = Uuid::new_v4();
        let request = ChatRequest { question: question.to_string(), member_number };
        debug!(%request_id, "chat request sent");

        let (text, outcome) = match self.backend.ask(&request).await {
            Ok(reply) => match reply.text() {
                Some(text) => (text.to_string(), SendOutcome::Answered),
                None => {
                    warn!(%request_id, "chat reply missing response field");
                    (NO_ANSWER_TEXT.to_string(), SendOutcome::NoAnswer)
                }
            },
            Err(e) => {
                warn!(%request_id, error = %e, "chat request failed");
                (ERROR_TEXT.to_string(), SendOutcome::Failed)
            }
        };

        self.state.send_modify(|s| {
            s.chat.append_assistant_message(text);
            s.chat.finish_request();
        });
        pending.armed = false;
        debug!(%request_id, ?outcome, "chat request settled");
        outcome
    }
}

/// Settles a dispatch that is abandoned before its reply lands: the user
/// message still gets the error fallback and the pending slot is released.
struct PendingGuard<'a> {
    state: &'a watch::Sender<WidgetState>,
    armed: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|s| {
                s.chat.append_assistant_message(ERROR_TEXT);
                s.chat.finish_request();
            });
        }
    }
}

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;
