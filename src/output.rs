use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::types::ErrorMap;

static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[derive(Tabled)]
struct ErrorRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Message")]
    message: String,
}

/// Render the per-field messages, one row per failing field
pub fn print_errors(errors: &ErrorMap) {
    if is_json_output() {
        print_json(&serde_json::json!({ "errors": errors }));
        return;
    }

    eprintln!("{}", errors_table(errors));
}

fn errors_table(errors: &ErrorMap) -> String {
    let rows: Vec<ErrorRow> = errors
        .iter()
        .map(|(field, message)| ErrorRow {
            field: field.label(),
            message: message.red().to_string(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print a single item as JSON, or run the human display
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        print_json(item);
    } else {
        display(item);
    }
}

/// Print a success message (skipped when quiet, or prints simple object)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    if is_json_output() {
        print_json(&serde_json::json!({ "message": message }));
    } else {
        println!("{}", message.green());
    }
}

/// Text for the shared error area
pub fn print_error(message: &str) {
    if is_json_output() {
        print_json(&serde_json::json!({ "error": message }));
    } else {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }
}

/// Loading indicator while a request is in flight
pub fn print_progress(message: &str) {
    if !is_quiet() && !is_json_output() {
        eprintln!("{}", message.bright_black());
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    #[test]
    fn test_errors_table_lists_each_field() {
        colored::control::set_override(false);
        let mut errors = ErrorMap::new();
        errors.insert(Field::Age, "Valid age is required");
        errors.insert(Field::Name, "Name is required");

        let table = errors_table(&errors);

        assert!(table.contains("Field"));
        assert!(table.contains("Name is required"));
        assert!(table.contains("Valid age is required"));
        let name_at = table.find("Name is required").unwrap();
        let age_at = table.find("Valid age is required").unwrap();
        assert!(name_at < age_at);
    }
}
