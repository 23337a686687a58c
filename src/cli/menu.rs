// src/cli/menu.rs
use std::time::Instant;

use console::style;
use inquire::{CustomType, InquireError, MultiSelect, Select};

use crate::clipboard::ClipboardSink;
use crate::core::banner::BannerKind;
use crate::core::config::Config;
use crate::core::session::Session;
use crate::error::Result;
use crate::models::{clamp_length, FieldChange, MAX_LENGTH, MIN_LENGTH};

const GENERATE: &str = "🔐  Générer";
const COPY: &str = "📋  Copier";
const LENGTH: &str = "📏  Taille";
const CLASSES: &str = "🔠  Options";
const QUIT: &str = "🚪  Quitter";

const UPPERCASE: &str = "Majuscule";
const LOWERCASE: &str = "Minuscule";
const NUMBERS: &str = "Nombres";
const SYMBOLS: &str = "Symboles";

pub fn run_cli_menu<S: ClipboardSink + ?Sized>(config: &Config, clipboard: &mut S) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔑 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = Session::new(config.default_options, config.message_duration);

    loop {
        render(&session);

        let choice = match Select::new("Action:", vec![GENERATE, COPY, LENGTH, CLASSES, QUIT]).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            GENERATE => {
                // Errors are surfaced through the session banner
                let _ = session.submit(Instant::now());
            }
            COPY => {
                session.copy(Instant::now(), clipboard);
            }
            LENGTH => {
                let length = CustomType::<usize>::new(&format!("Taille ({}-{}):", MIN_LENGTH, MAX_LENGTH))
                    .with_default(session.options().length)
                    .with_error_message("Veuillez entrer un nombre")
                    .prompt_skippable()?;
                if let Some(length) = length {
                    session.change(FieldChange::Length(clamp_length(length)));
                }
            }
            CLASSES => {
                let options = session.options();
                let defaults: Vec<usize> = [
                    options.include_uppercase,
                    options.include_lowercase,
                    options.include_numbers,
                    options.include_symbols,
                ]
                .iter()
                .enumerate()
                .filter_map(|(i, on)| on.then_some(i))
                .collect();

                let picked = MultiSelect::new("Caractères:", vec![UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS])
                    .with_default(&defaults)
                    .prompt_skippable()?;

                if let Some(picked) = picked {
                    session.change(FieldChange::Uppercase(picked.contains(&UPPERCASE)));
                    session.change(FieldChange::Lowercase(picked.contains(&LOWERCASE)));
                    session.change(FieldChange::Numbers(picked.contains(&NUMBERS)));
                    session.change(FieldChange::Symbols(picked.contains(&SYMBOLS)));
                }
            }
            _ => break,
        }
    }

    log::info!("Interactive session closed");
    Ok(())
}

fn render(session: &Session) {
    println!();
    if let Some(banner) = session.banner(Instant::now()) {
        match banner.kind {
            BannerKind::Success => println!("{}", style(format!("✅ {}", banner.text)).green().bold()),
            BannerKind::Error => println!("{}", style(format!("❌ {}", banner.text)).red().bold()),
        }
    }

    let password = session.password().unwrap_or("");
    if password.is_empty() {
        println!("Mot de passe: {}", style("Min 6 Char").dim());
    } else {
        println!("Mot de passe: {}", style(password).cyan().bold());
    }

    let options = session.options();
    println!(
        "Taille: {}  {} {}  {} {}  {} {}  {} {}",
        options.length,
        mark(options.include_uppercase),
        UPPERCASE,
        mark(options.include_lowercase),
        LOWERCASE,
        mark(options.include_numbers),
        NUMBERS,
        mark(options.include_symbols),
        SYMBOLS,
    );
}

fn mark(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}
