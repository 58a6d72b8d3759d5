use crate::cli::UserArgs;
use crate::commands::{report, submit_with_progress, FormSettings};
use crate::error::{FormError, Result};

pub async fn run(settings: &FormSettings, args: &UserArgs) -> Result<()> {
    let mut form = settings.controller()?;

    for (field, value) in args.fields() {
        form.on_field_change(field, value);
    }

    let outcome = submit_with_progress(&mut form).await;
    report(&outcome, form.state());

    if outcome.is_success() {
        Ok(())
    } else {
        Err(FormError::SubmissionFailed)
    }
}
