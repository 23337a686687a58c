// src/cli/handlers.rs
use std::io::Write;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::cli::GenerateArgs;
use crate::clipboard::ClipboardSink;
use crate::core::config::Config;
use crate::error::{Result, COPIED_MESSAGE};
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub options: PasswordGenerationOptions,
    pub passwords: Vec<String>,
    pub copied: bool,
}

/// Produces `count` passwords for the given options.
pub fn generate_batch<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    let generator = PasswordGenerator::new();
    let passwords = (0..count)
        .map(|_| generator.generate_with_rng(options, rng))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(passwords)
}

// Handler for `passgen generate`
pub fn handle_generate<W, S>(args: &GenerateArgs, config: &Config, out: &mut W, clipboard: &mut S) -> Result<()>
where
    W: Write,
    S: ClipboardSink + ?Sized,
{
    let options = args.options(config.default_options);
    log::debug!("Generate command with {:?}", options);

    let passwords = match args.seed {
        Some(seed) => generate_batch(&options, args.count, &mut ChaCha8Rng::seed_from_u64(seed))?,
        None => generate_batch(&options, args.count, &mut rand::thread_rng())?,
    };

    // A failed copy still prints the passwords
    let copied = if args.copy {
        match clipboard.write_text(&passwords.join("\n")) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not copy to clipboard: {}", e);
                eprintln!("❌ {}", e);
                false
            }
        }
    } else {
        false
    };

    if args.json {
        let output = GenerateOutput { options, passwords, copied };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        for password in &passwords {
            writeln!(out, "{}", password)?;
        }
        if copied {
            eprintln!("✅ {}", COPIED_MESSAGE);
        }
    }
    out.flush()?;

    // The clipboard only lives as long as this process on some platforms
    if copied {
        if let Err(e) = clipboard.hold(config.clipboard_hold) {
            log::warn!("Clipboard hold ended early: {}", e);
        }
    }

    Ok(())
}
