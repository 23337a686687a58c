// src/cli/commands.rs
use clap::builder::RangedU64ValueParser;
use clap::{Args, Subcommand};

use crate::models::{PasswordGenerationOptions, MAX_LENGTH, MIN_LENGTH};

/// Most passwords a single `generate` run may print.
pub const MAX_COUNT: usize = 1000;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate password(s) and print them
    Generate(GenerateArgs),

    /// Open the interactive generator form
    Interactive,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(MIN_LENGTH as u64..=MAX_LENGTH as u64))]
    pub length: Option<usize>,

    /// Include uppercase letters (A-Z)
    #[arg(long, overrides_with = "no_uppercase")]
    pub uppercase: bool,

    /// Leave out uppercase letters
    #[arg(long, overrides_with = "uppercase")]
    pub no_uppercase: bool,

    /// Include lowercase letters (a-z)
    #[arg(long, overrides_with = "no_lowercase")]
    pub lowercase: bool,

    /// Leave out lowercase letters
    #[arg(long, overrides_with = "lowercase")]
    pub no_lowercase: bool,

    /// Include digits (0-9)
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Leave out digits
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Include symbols (!@#$%^&* ...)
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_COUNT as u64))]
    pub count: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the result to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Layers the flags given on the command line over `defaults`.
    pub fn options(&self, defaults: PasswordGenerationOptions) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: switch(self.uppercase, self.no_uppercase, defaults.include_uppercase),
            include_lowercase: switch(self.lowercase, self.no_lowercase, defaults.include_lowercase),
            include_numbers: switch(self.numbers, self.no_numbers, defaults.include_numbers),
            include_symbols: switch(self.symbols, self.no_symbols, defaults.include_symbols),
        }
    }
}

// `--x` / `--no-x` override each other, so at most one is set
fn switch(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}
