use std::io::{self, BufRead, Write};

use crate::client::UserTransport;
use crate::commands::{report, submit_with_progress, FormSettings};
use crate::error::{FormError, Result};
use crate::form::{FormController, FormState, SubmitOutcome};
use crate::navigation::Navigator;
use crate::types::Field;

pub async fn run(settings: &FormSettings) -> Result<()> {
    let mut form = settings.controller()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("User Form");
    println!("=========\n");

    match run_session(&mut form, &mut input).await? {
        Some(outcome) if outcome.is_success() => Ok(()),
        Some(_) => Err(FormError::SubmissionFailed),
        None => {
            println!("\nAborted.");
            Ok(())
        }
    }
}

/// Prompt for missing or rejected fields and submit until the user is created,
/// the user declines a retry, or input ends (`None`).
pub async fn run_session<T, N, R>(
    form: &mut FormController<T, N>,
    input: &mut R,
) -> Result<Option<SubmitOutcome>>
where
    T: UserTransport,
    N: Navigator,
    R: BufRead,
{
    loop {
        for field in Field::ALL {
            // Failing fields were already listed by `report`.
            if !needs_input(form.state(), field) {
                continue;
            }

            let Some(value) = prompt(input, &format!("{}: ", field.label()))? else {
                return Ok(None);
            };
            form.on_field_change(field, value);
        }

        let outcome = submit_with_progress(form).await;
        report(&outcome, form.state());

        match outcome {
            SubmitOutcome::Success => return Ok(Some(outcome)),
            SubmitOutcome::Invalid { .. } => continue,
            SubmitOutcome::ServerRejection { .. } | SubmitOutcome::TransportError { .. } => {
                let Some(answer) = prompt(input, "Retry? [Y/n] ")? else {
                    return Ok(Some(outcome));
                };
                if answer.trim().eq_ignore_ascii_case("n") {
                    return Ok(Some(outcome));
                }
            }
        }
    }
}

/// Blank fields and fields the last validation rejected.
fn needs_input(state: &FormState, field: Field) -> bool {
    state.draft.get(field).is_empty() || state.errors.contains(field)
}

/// Read one line without its terminator; `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
