// src/generators/password.rs
use rand::Rng;

use super::charset::CharacterClass;
use crate::error::GeneratorError;
use crate::models::PasswordGenerationOptions;

#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generates a password using the thread-local generator.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    /// Generates a password drawing entropy from `rng`.
    ///
    /// Each position independently picks one enabled class and then one
    /// character from it, so the class mix of the result is itself random.
    /// `options.length` is used as is; bounding it is up to the caller.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        if !options.has_any_class() {
            log::debug!("Password generation refused: no character class selected");
            return Err(GeneratorError::NoClassSelected);
        }
        let classes = CharacterClass::enabled(options);

        log::debug!(
            "Generating password of length {} from {} class(es)",
            options.length,
            classes.len()
        );

        let password = (0..options.length)
            .map(|_| {
                let class = classes[rng.gen_range(0..classes.len())];
                class.sample(rng)
            })
            .collect();

        Ok(password)
    }
}
