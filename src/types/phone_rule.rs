use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Accepted phone number shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneRule {
    /// `(555) 123-4567`
    #[default]
    Formatted,
    /// At least 10 digits and nothing else
    Digits,
}

impl PhoneRule {
    /// Message recorded when a phone number fails this rule.
    pub fn message(self) -> &'static str {
        match self {
            PhoneRule::Formatted => "Valid phone number is required in format (555) 123-4567",
            PhoneRule::Digits => "Valid phone number is required (at least 10 digits)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhoneRule::Formatted => "formatted",
            PhoneRule::Digits => "digits",
        }
    }
}

impl fmt::Display for PhoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PhoneRule {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formatted" => Ok(PhoneRule::Formatted),
            "digits" => Ok(PhoneRule::Digits),
            _ => Err(FormError::UnknownPhoneRule(s.to_string())),
        }
    }
}
