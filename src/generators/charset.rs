// src/generators/charset.rs
use rand::Rng;

use crate::models::PasswordGenerationOptions;

/// Symbols the `Symbols` class draws from.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>/?";

pub const UPPERCASE_RANGE: (u8, u8) = (b'A', b'Z');
pub const LOWERCASE_RANGE: (u8, u8) = (b'a', b'z');
pub const NUMBERS_RANGE: (u8, u8) = (b'0', b'9');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// Classes switched on in `options`, in a fixed order.
    pub fn enabled(options: &PasswordGenerationOptions) -> Vec<CharacterClass> {
        Self::ALL
            .into_iter()
            .filter(|class| class.is_enabled(options))
            .collect()
    }

    pub fn is_enabled(&self, options: &PasswordGenerationOptions) -> bool {
        match self {
            CharacterClass::Uppercase => options.include_uppercase,
            CharacterClass::Lowercase => options.include_lowercase,
            CharacterClass::Numbers => options.include_numbers,
            CharacterClass::Symbols => options.include_symbols,
        }
    }

    /// Draws one character belonging to this class.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        match self {
            CharacterClass::Uppercase => random_char_in_range(rng, UPPERCASE_RANGE.0, UPPERCASE_RANGE.1),
            CharacterClass::Lowercase => random_char_in_range(rng, LOWERCASE_RANGE.0, LOWERCASE_RANGE.1),
            CharacterClass::Numbers => random_char_in_range(rng, NUMBERS_RANGE.0, NUMBERS_RANGE.1),
            CharacterClass::Symbols => random_symbol(rng),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Numbers => c.is_ascii_digit(),
            CharacterClass::Symbols => c.is_ascii() && SYMBOLS.contains(&(c as u8)),
        }
    }
}

/// Returns the character whose code point is drawn uniformly from the
/// inclusive range `[min_code, max_code]`.
///
/// Panics if `min_code > max_code`.
pub fn random_char_in_range<R: Rng + ?Sized>(rng: &mut R, min_code: u8, max_code: u8) -> char {
    char::from(rng.gen_range(min_code..=max_code))
}

/// Returns one character drawn uniformly from [`SYMBOLS`].
pub fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(SYMBOLS[rng.gen_range(0..SYMBOLS.len())])
}
