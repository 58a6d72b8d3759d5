use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::types::{Field, PhoneRule};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "create-user")]
#[command(about = "Validate a new user and send it to the user service", version)]
#[command(after_help = "EXAMPLES:
    create-user submit -n Ada -g F -a 30 -e a@b.com -p \"(555) 123-4567\"
    create-user validate -e not-an-email
    create-user interactive
    create-user --endpoint http://localhost:3000 interactive")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Base URL of the user service (overrides CREATE_USER_ENDPOINT and config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Phone number rule (overrides config)
    #[arg(long, global = true, value_enum)]
    pub phone_rule: Option<PhoneRule>,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the fields and create the user
    #[command(
        alias = "s",
        after_help = "EXAMPLES:
    create-user submit -n Ada -g F -a 30 -e a@b.com -p \"(555) 123-4567\"
    create-user submit --phone-rule digits -n Ada -g F -a 30 -e a@b.com -p 5551234567"
    )]
    Submit(UserArgs),
    /// Check the fields without sending anything
    #[command(
        alias = "v",
        after_help = "EXAMPLES:
    create-user validate -n Ada -e a@b.com
    create-user validate -e not-an-email --format json"
    )]
    Validate(UserArgs),
    /// Fill in the form field by field
    #[command(
        alias = "i",
        after_help = "EXAMPLES:
    create-user interactive
    create-user interactive --phone-rule digits"
    )]
    Interactive,
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    create-user init")]
    Init,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    create-user completions bash > ~/.bash_completion.d/create-user
    create-user completions zsh > ~/.zfunc/_create-user")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct UserArgs {
    /// Full name
    #[arg(long, short, default_value = "")]
    pub name: String,

    /// Gender
    #[arg(long, short, default_value = "")]
    pub gender: String,

    /// Age (any number)
    #[arg(long, short, default_value = "", allow_hyphen_values = true)]
    pub age: String,

    /// Email address
    #[arg(long, short, default_value = "")]
    pub email: String,

    /// Phone number, e.g. "(555) 123-4567"
    #[arg(long, short, default_value = "")]
    pub phone: String,
}

impl UserArgs {
    pub fn fields(&self) -> [(Field, &str); 5] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Gender, self.gender.as_str()),
            (Field::Age, self.age.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Phone, self.phone.as_str()),
        ]
    }
}
