// src/core/session.rs
use std::time::{Duration, Instant};

use rand::Rng;

use crate::clipboard::ClipboardSink;
use crate::core::banner::{Banner, Banners};
use crate::error::{GeneratorError, COPIED_MESSAGE, NOTHING_TO_COPY_MESSAGE};
use crate::generators::PasswordGenerator;
use crate::models::{FieldChange, PasswordGenerationOptions};

/// State behind the generator form: current options, last password and
/// whatever message is on screen.
#[derive(Debug, Clone)]
pub struct Session {
    options: PasswordGenerationOptions,
    password: Option<String>,
    banners: Banners,
    generator: PasswordGenerator,
}

impl Session {
    pub fn new(options: PasswordGenerationOptions, message_duration: Duration) -> Self {
        Self {
            options,
            password: None,
            banners: Banners::new(message_duration),
            generator: PasswordGenerator::new(),
        }
    }

    pub fn options(&self) -> &PasswordGenerationOptions {
        &self.options
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn banner(&self, now: Instant) -> Option<&Banner> {
        self.banners.visible(now)
    }

    pub fn change(&mut self, change: FieldChange) {
        log::trace!("Form change: {:?}", change);
        self.options = self.options.apply(change);
    }

    pub fn submit(&mut self, now: Instant) -> Result<&str, GeneratorError> {
        self.submit_with_rng(now, &mut rand::thread_rng())
    }

    /// Generates a new password. On failure the previous password is kept
    /// and an error banner is posted.
    pub fn submit_with_rng<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Result<&str, GeneratorError> {
        match self.generator.generate_with_rng(&self.options, rng) {
            Ok(password) => {
                self.banners.clear_error();
                Ok(self.password.insert(password).as_str())
            }
            Err(e) => {
                log::info!("Generation rejected: {}", e);
                self.banners.error(e.to_string(), now);
                Err(e)
            }
        }
    }

    /// Copies the current password through `sink`. Returns whether anything
    /// was copied; the outcome is also posted as a banner.
    pub fn copy<S: ClipboardSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> bool {
        let Some(password) = self.password.as_deref() else {
            self.banners.error(NOTHING_TO_COPY_MESSAGE, now);
            return false;
        };

        match sink.write_text(password) {
            Ok(()) => {
                self.banners.success(COPIED_MESSAGE, now);
                true
            }
            Err(e) => {
                log::error!("Clipboard write failed: {}", e);
                self.banners.error(e.to_string(), now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::core::banner::BannerKind;
    use crate::error::{AppError, NO_CLASS_SELECTED_MESSAGE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const TTL: Duration = Duration::from_secs(3);

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> crate::error::Result<()> {
            Err(AppError::Clipboard("no display".into()))
        }
    }

    fn session() -> Session {
        Session::new(PasswordGenerationOptions::default(), TTL)
    }

    fn clear_all(session: &mut Session) {
        for change in [
            FieldChange::Uppercase(false),
            FieldChange::Lowercase(false),
            FieldChange::Numbers(false),
            FieldChange::Symbols(false),
        ] {
            session.change(change);
        }
    }

    #[test]
    fn submit_stores_password() {
        let mut session = session();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let generated = session.submit_with_rng(Instant::now(), &mut rng).unwrap().to_string();
        assert_eq!(generated.len(), 6);
        assert_eq!(session.password(), Some(generated.as_str()));
    }

    #[test]
    fn failed_submit_keeps_previous_password_and_shows_error() {
        let now = Instant::now();
        let mut session = session();
        let first = session.submit(now).unwrap().to_string();

        clear_all(&mut session);
        assert_eq!(session.submit(now), Err(GeneratorError::NoClassSelected));
        assert_eq!(session.password(), Some(first.as_str()));

        let banner = session.banner(now).unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, NO_CLASS_SELECTED_MESSAGE);
        assert!(session.banner(now + TTL).is_none());
    }

    #[test]
    fn successful_submit_clears_error() {
        let now = Instant::now();
        let mut session = session();
        clear_all(&mut session);
        assert!(session.submit(now).is_err());

        session.change(FieldChange::Numbers(true));
        session.submit(now).unwrap();
        assert!(session.banner(now).is_none());
        assert!(session.password().unwrap().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn change_uses_new_length() {
        let mut session = session();
        session.change(FieldChange::Length(15));
        assert_eq!(session.options().length, 15);
        assert_eq!(session.submit(Instant::now()).unwrap().len(), 15);
    }

    #[test]
    fn copy_without_password_reports_error() {
        let now = Instant::now();
        let mut session = session();
        let mut sink = MemoryClipboard::default();

        assert!(!session.copy(now, &mut sink));
        assert!(sink.contents.is_none());
        assert_eq!(session.banner(now).unwrap().text, NOTHING_TO_COPY_MESSAGE);
    }

    #[test]
    fn huge_message_duration_does_not_break_banners() {
        let now = Instant::now();
        let mut session = Session::new(PasswordGenerationOptions::default(), Duration::MAX);
        let mut sink = MemoryClipboard::default();

        assert!(!session.copy(now, &mut sink));
        assert_eq!(session.banner(now).unwrap().text, NOTHING_TO_COPY_MESSAGE);
    }

    #[test]
    fn copy_writes_password_and_confirms() {
        let now = Instant::now();
        let mut session = session();
        let mut sink = MemoryClipboard::default();
        let password = session.submit(now).unwrap().to_string();

        assert!(session.copy(now, &mut sink));
        assert_eq!(sink.contents.as_deref(), Some(password.as_str()));

        let banner = session.banner(now).unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.text, COPIED_MESSAGE);
        assert!(session.banner(now + TTL).is_none());
    }

    #[test]
    fn clipboard_failure_becomes_error_banner() {
        let now = Instant::now();
        let mut session = session();
        session.submit(now).unwrap();

        assert!(!session.copy(now, &mut BrokenClipboard));
        let banner = session.banner(now).unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert!(banner.text.contains("no display"));
    }
}
