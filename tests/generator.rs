use passgen::generators::{CharacterClass, SYMBOLS};
use passgen::{GeneratorError, PasswordGenerationOptions, PasswordGenerator};

fn options(length: usize, upper: bool, lower: bool, numbers: bool, symbols: bool) -> PasswordGenerationOptions {
    PasswordGenerationOptions {
        length,
        include_uppercase: upper,
        include_lowercase: lower,
        include_numbers: numbers,
        include_symbols: symbols,
    }
}

/// Every combination of the four flags except all-off.
fn non_empty_combinations() -> impl Iterator<Item = [bool; 4]> {
    (1u8..16).map(|bits| [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0])
}

#[test]
fn length_matches_for_every_class_combination() {
    let generator = PasswordGenerator::new();
    for [u, l, n, s] in non_empty_combinations() {
        for length in 6..=20 {
            let password = generator.generate_password(&options(length, u, l, n, s)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }
}

#[test]
fn characters_come_from_enabled_classes_only() {
    let generator = PasswordGenerator::new();
    for [u, l, n, s] in non_empty_combinations() {
        let opts = options(20, u, l, n, s);
        let enabled = CharacterClass::enabled(&opts);
        for _ in 0..25 {
            let password = generator.generate_password(&opts).unwrap();
            for c in password.chars() {
                assert!(
                    enabled.iter().any(|class| class.contains(c)),
                    "{c:?} not in any of {enabled:?}"
                );
            }
        }
    }
}

#[test]
fn all_disabled_always_fails() {
    let generator = PasswordGenerator::new();
    for length in [1, 6, 10, 20, 500] {
        assert_eq!(
            generator.generate_password(&options(length, false, false, false, false)),
            Err(GeneratorError::NoClassSelected)
        );
    }
}

#[test]
fn all_enabled_eight_chars_from_union() {
    let password = PasswordGenerator::new()
        .generate_password(&options(8, true, true, true, true))
        .unwrap();
    assert_eq!(password.len(), 8);
    assert!(password
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || SYMBOLS.contains(&b)));
}

#[test]
fn symbols_only_uses_symbol_set() {
    let password = PasswordGenerator::new()
        .generate_password(&options(20, false, false, false, true))
        .unwrap();
    assert!(password.bytes().all(|b| SYMBOLS.contains(&b)), "{password}");
}

#[test]
fn repeated_calls_each_satisfy_membership() {
    // Outputs may differ between calls; only membership is checked.
    let generator = PasswordGenerator::new();
    let opts = options(12, false, true, false, false);
    let a = generator.generate_password(&opts).unwrap();
    let b = generator.generate_password(&opts).unwrap();
    assert!(a.chars().chain(b.chars()).all(|c| c.is_ascii_lowercase()));
}
