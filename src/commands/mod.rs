pub mod init;
pub mod interactive;
pub mod submit;
pub mod validate;

use std::time::Duration;

use crate::cli::Cli;
use crate::client::{UserApiClient, UserTransport};
use crate::config::Config;
use crate::error::Result;
use crate::form::{FormController, FormState, SubmitOutcome};
use crate::navigation::{Navigator, TerminalNavigator};
use crate::output;
use crate::types::PhoneRule;

/// Effective settings after merging flags, environment and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSettings {
    pub endpoint: String,
    pub phone_rule: PhoneRule,
    pub timeout: Option<Duration>,
}

impl FormSettings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            endpoint: config.resolve_endpoint(cli.endpoint.as_deref()),
            phone_rule: config.resolve_phone_rule(cli.phone_rule),
            timeout: config.timeout(),
        }
    }

    pub fn controller(&self) -> Result<FormController<UserApiClient, TerminalNavigator>> {
        let client = UserApiClient::new(&self.endpoint, self.timeout)?;
        tracing::debug!(url = %client.users_url(), rule = %self.phone_rule, "form ready");
        Ok(FormController::new(
            client,
            TerminalNavigator::default(),
            self.phone_rule,
        ))
    }
}

/// Submit, showing the loading indicator only when a request will be sent.
pub async fn submit_with_progress<T: UserTransport, N: Navigator>(
    form: &mut FormController<T, N>,
) -> SubmitOutcome {
    if form.validate().is_empty() {
        output::print_progress("Submitting...");
    }
    form.on_submit().await
}

pub fn report(outcome: &SubmitOutcome, state: &FormState) {
    if output::is_json_output() {
        output::print_item(outcome, |_| {});
        return;
    }

    match outcome {
        SubmitOutcome::Invalid { errors } => output::print_errors(errors),
        SubmitOutcome::Success => output::print_message("User created"),
        SubmitOutcome::ServerRejection { .. } | SubmitOutcome::TransportError { .. } => {
            output::print_error(state.error.as_deref().unwrap_or("Submission failed"));
        }
    }
}
