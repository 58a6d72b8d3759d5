use crate::cli::UserArgs;
use crate::error::{FormError, Result};
use crate::output;
use crate::types::{PhoneRule, UserDraft};
use crate::validation;

pub fn run(phone_rule: PhoneRule, args: &UserArgs) -> Result<()> {
    let mut draft = UserDraft::default();
    for (field, value) in args.fields() {
        draft.set(field, value);
    }

    let errors = validation::validate(&draft, phone_rule);

    if output::is_json_output() || !errors.is_empty() {
        output::print_errors(&errors);
    } else {
        output::print_message("All fields are valid");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FormError::InvalidDraft {
            count: errors.len(),
        })
    }
}
