// src/models.rs
use serde::{Deserialize, Serialize};

/// Smallest length the interactive form accepts.
pub const MIN_LENGTH: usize = 6;
/// Largest length the interactive form accepts.
pub const MAX_LENGTH: usize = 20;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: MIN_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

/// A single edit made to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    Length(usize),
    Uppercase(bool),
    Lowercase(bool),
    Numbers(bool),
    Symbols(bool),
}

impl PasswordGenerationOptions {
    /// Returns a new set of options with one field replaced.
    pub fn apply(self, change: FieldChange) -> Self {
        match change {
            FieldChange::Length(length) => Self { length, ..self },
            FieldChange::Uppercase(on) => Self { include_uppercase: on, ..self },
            FieldChange::Lowercase(on) => Self { include_lowercase: on, ..self },
            FieldChange::Numbers(on) => Self { include_numbers: on, ..self },
            FieldChange::Symbols(on) => Self { include_symbols: on, ..self },
        }
    }

    pub fn has_any_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

/// Bounds a user-supplied length to the range the form allows.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form() {
        let options = PasswordGenerationOptions::default();
        assert_eq!(options.length, 6);
        assert!(options.include_uppercase);
        assert!(options.include_lowercase);
        assert!(!options.include_numbers);
        assert!(!options.include_symbols);
    }

    #[test]
    fn apply_replaces_only_the_changed_field() {
        let before = PasswordGenerationOptions::default();
        let after = before.apply(FieldChange::Symbols(true));
        assert!(after.include_symbols);
        assert_eq!(after, PasswordGenerationOptions { include_symbols: true, ..before });

        let after = after.apply(FieldChange::Length(12));
        assert_eq!(after.length, 12);
        assert!(after.include_symbols);
    }

    #[test]
    fn has_any_class_is_false_only_when_everything_is_off() {
        let none = PasswordGenerationOptions::default()
            .apply(FieldChange::Uppercase(false))
            .apply(FieldChange::Lowercase(false));
        assert!(!none.has_any_class());
        assert!(none.apply(FieldChange::Numbers(true)).has_any_class());
    }

    #[test]
    fn clamp_length_bounds_form_input() {
        assert_eq!(clamp_length(0), MIN_LENGTH);
        assert_eq!(clamp_length(12), 12);
        assert_eq!(clamp_length(200), MAX_LENGTH);
    }
}
