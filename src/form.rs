//! The user form: state container, reducer and submission flow.
//!
//! All state changes go through [`FormState::apply`], so the form can be
//! driven and inspected without any front end. [`FormController`] adds the
//! side effects: one POST per valid submission and one navigation event on
//! success.

use serde::{Deserialize, Serialize};

use crate::client::{is_success, UserTransport};
use crate::navigation::{Navigator, Route};
use crate::types::{ErrorMap, Field, PhoneRule, UserDraft};
use crate::validation;

/// Everything the front end needs to render the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub draft: UserDraft,
    /// Inline messages, one per failing field.
    pub errors: ErrorMap,
    /// A request is in flight.
    pub loading: bool,
    /// Shared error area for failures not tied to a field.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FieldChanged { field: Field, value: String },
    ValidationFailed(ErrorMap),
    SubmitStarted,
    SubmitFinished(SubmitOutcome),
    #[allow(dead_code)]
    Reset,
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid { errors: ErrorMap },
    Success,
    /// The server answered outside 2xx.
    ServerRejection { status: u16 },
    /// No response was received.
    TransportError { message: String },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }
}

pub fn rejection_message(status: u16) -> String {
    format!("Server rejected the submission (status {status})")
}

impl FormState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FieldChanged { field, value } => self.draft.set(field, value),
            Action::ValidationFailed(errors) => self.errors = errors,
            Action::SubmitStarted => {
                self.errors = ErrorMap::new();
                self.error = None;
                self.loading = true;
            }
            Action::SubmitFinished(outcome) => {
                self.loading = false;
                match outcome {
                    SubmitOutcome::Invalid { errors } => self.errors = errors,
                    SubmitOutcome::Success => self.draft.clear(),
                    SubmitOutcome::ServerRejection { status } => {
                        self.error = Some(rejection_message(status));
                    }
                    SubmitOutcome::TransportError { message } => self.error = Some(message),
                }
            }
            Action::Reset => *self = Self::default(),
        }
    }
}

pub struct FormController<T, N> {
    state: FormState,
    phone_rule: PhoneRule,
    transport: T,
    navigator: N,
}

impl<T: UserTransport, N: Navigator> FormController<T, N> {
    pub fn new(transport: T, navigator: N, phone_rule: PhoneRule) -> Self {
        Self {
            state: FormState::default(),
            phone_rule,
            transport,
            navigator,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[cfg(test)]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.state.apply(Action::FieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Check the current draft without touching state.
    pub fn validate(&self) -> ErrorMap {
        validation::validate(&self.state.draft, self.phone_rule)
    }

    /// Validate, then send the draft once. Never retries.
    ///
    /// `&mut self` keeps a second submission from starting while one is
    /// still in flight.
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "validation failed, not submitting");
            self.state.apply(Action::ValidationFailed(errors.clone()));
            return SubmitOutcome::Invalid { errors };
        }

        self.state.apply(Action::SubmitStarted);
        tracing::info!(email = %self.state.draft.email, "submitting user");

        let outcome = match self.transport.create_user(&self.state.draft).await {
            Ok(status) if is_success(status) => {
                tracing::info!(status, "user created");
                SubmitOutcome::Success
            }
            Ok(status) => {
                tracing::warn!(status, "user service rejected submission");
                SubmitOutcome::ServerRejection { status }
            }
            Err(err) => {
                tracing::error!(error = %err, "user submission failed");
                SubmitOutcome::TransportError {
                    message: err.to_string(),
                }
            }
        };

        self.state.apply(Action::SubmitFinished(outcome.clone()));
        if outcome.is_success() {
            self.navigator.navigate(Route::ShowUsers);
        }

        outcome
    }
}
