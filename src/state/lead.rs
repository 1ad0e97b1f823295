//! Lead-capture form that gates the chat panel.
//!
//! DESIGN
//! ======
//! Fields are written on every keystroke without validation. Validation runs
//! once, at submit time, and only checks that `name` and `email` are
//! non-empty. A successful submit freezes the form for the rest of the
//! session; there is no transition back to unsubmitted.

/// Notice shown when a required field is missing.
pub const MISSING_FIELDS_NOTICE: &str = "Por favor completa tu nombre y correo.";

/// Validation failures raised by [`LeadForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadFormError {
    /// A required field was empty at submit time.
    #[error("required lead field is empty: {0}")]
    MissingField(&'static str),
}

impl LeadFormError {
    /// User-facing text for the blocking notice.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::MissingField(_) => MISSING_FIELDS_NOTICE,
        }
    }
}

/// Form inputs addressable by [`LeadForm::update_field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    MemberNumber,
}

impl LeadField {
    /// Label rendered next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Email => "Correo electrónico",
            Self::MemberNumber => "Número de asociado (opcional)",
        }
    }
}

/// Lead data plus its one-way submitted flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub member_number: String,
    submitted: bool,
}

impl LeadForm {
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Write one field. Returns `false` when the form is already frozen.
    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) -> bool {
        if self.submitted {
            return false;
        }
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::MemberNumber => &mut self.member_number,
        };
        *slot = value.into();
        true
    }

    /// Validate required fields and mark the form submitted.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError::MissingField`] when `name` or `email` is empty.
    /// The form is left untouched in that case.
    pub fn submit(&mut self) -> Result<(), LeadFormError> {
        if self.submitted {
            return Ok(());
        }
        if self.name.is_empty() {
            return Err(LeadFormError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(LeadFormError::MissingField("email"));
        }
        self.submitted = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;
