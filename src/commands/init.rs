use std::io::{self, Write};

use crate::client::{users_url, DEFAULT_ENDPOINT};
use crate::config::Config;
use crate::error::{FormError, Result};
use crate::types::PhoneRule;

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = ask(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("create-user Configuration");
    println!("=========================\n");

    let endpoint = ask(&format!("User service endpoint [{DEFAULT_ENDPOINT}]: "))?;
    let endpoint = if endpoint.is_empty() {
        None
    } else {
        // Fail now rather than on the first submission.
        users_url(&endpoint)?;
        Some(endpoint)
    };

    let phone_rule = ask("Phone rule, formatted or digits [formatted]: ")?;
    let phone_rule = if phone_rule.is_empty() {
        None
    } else {
        Some(phone_rule.parse::<PhoneRule>()?)
    };

    let timeout = ask("Request timeout in seconds [none]: ")?;
    let timeout_secs = if timeout.is_empty() {
        None
    } else {
        timeout.parse::<u64>().ok()
    };

    let config = Config {
        endpoint,
        phone_rule,
        timeout_secs,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FormError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, toml::to_string(&config)?).map_err(|e| {
        FormError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        }
    })?;

    println!("\nConfig saved to {}", config_path.display());

    Ok(())
}

fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
