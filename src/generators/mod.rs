// src/generators/mod.rs
pub mod charset;
pub mod password;

pub use charset::{random_char_in_range, random_symbol, CharacterClass, SYMBOLS};
pub use password::PasswordGenerator;
