//! Integration tests for PassForm.
//!
//! These tests drive the public library the way the UI does:
//! - Character pool building
//! - Password generation
//! - Length validation
//! - Form actions (toggle, type, submit, reset)

// ============================================================================
// Test Module: Character Pool
// ============================================================================

mod charset_tests {
    use passform::{CharacterClass, CharacterClassSelection, build};

    #[test]
    fn test_lowercase_only_is_keyboard_order() {
        let pool = build(CharacterClassSelection::default());
        assert_eq!(pool.to_string(), "qwertyuiopasdfghjklzxcvbnm");
    }

    #[test]
    fn test_no_classes_is_empty() {
        assert!(build(CharacterClassSelection::none()).is_empty());
    }

    #[test]
    fn test_pool_sizes() {
        let cases = [
            (CharacterClassSelection::none().with(CharacterClass::Lowercase, true), 26),
            (CharacterClassSelection::none().with(CharacterClass::Uppercase, true), 26),
            (CharacterClassSelection::none().with(CharacterClass::Digits, true), 10),
            (CharacterClassSelection::none().with(CharacterClass::Symbols, true), 10),
        ];
        for (selection, expected) in cases {
            assert_eq!(build(selection).len(), expected, "{:?}", selection);
        }
    }
}

// ============================================================================
// Test Module: Password Generation
// ============================================================================

mod password_tests {
    use passform::{
        CharacterClass, CharacterClassSelection, InvalidInput, PasswordError, build,
        generate_password, generate_with_rng,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_password_generation_length() {
        let selection = CharacterClassSelection {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        };
        let pool = build(selection);
        for len in 4..=16 {
            let password = generate_password(&pool, len).unwrap();
            assert_eq!(password.chars().count(), len, "Password length mismatch for {}", len);
            assert!(password.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn test_uppercase_and_digits_scenario() {
        let selection = CharacterClassSelection::none()
            .with(CharacterClass::Uppercase, true)
            .with(CharacterClass::Digits, true);
        let pool = build(selection);
        assert_eq!(pool.len(), 36);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let password = generate_with_rng(&pool, 8, &mut rng).unwrap();
            assert_eq!(password.len(), 8);
            assert!(password.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_empty_pool_rejected() {
        let pool = build(CharacterClassSelection::none());
        assert_eq!(
            generate_password(&pool, 8),
            Err(PasswordError::InvalidInput(InvalidInput::EmptyPool))
        );
    }
}

// ============================================================================
// Test Module: Length Validation
// ============================================================================

mod validation_tests {
    use passform::{ValidationError, validate};

    #[test]
    fn test_rejections() {
        assert_eq!(validate("3").unwrap_err().to_string(), "Too Short!");
        assert_eq!(validate("20").unwrap_err().to_string(), "Too Long!");
        assert_eq!(validate("").unwrap_err().to_string(), "Required");
        assert_eq!(validate("eight"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(validate("4").unwrap().get(), 4);
        assert_eq!(validate("16").unwrap().get(), 16);
    }
}

// ============================================================================
// Test Module: Form Flow
// ============================================================================

mod form_tests {
    use passform::{
        CharacterClass, CharacterClassSelection, FormAction, FormState, Screen, ValidationError,
        reduce,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn run(actions: Vec<FormAction>) -> FormState {
        let mut rng = StdRng::seed_from_u64(1);
        actions.into_iter().fold(FormState::default(), |state, action| {
            reduce(&state, action, || rng.random::<f64>())
        })
    }

    #[test]
    fn test_full_generate_then_reset() {
        let state = run(vec![
            FormAction::SetClass(CharacterClass::Symbols, true),
            FormAction::SetLength("12".into()),
            FormAction::Submit,
        ]);
        assert_eq!(state.screen(), Screen::PasswordDisplayed);
        let password = state.copy_text().unwrap();
        assert_eq!(password.len(), 12);
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_lowercase() || "!@#$%^&*()".contains(c))
        );

        let state = reduce(&state, FormAction::Reset, || 0.0);
        assert_eq!(state.screen(), Screen::Configuring);
        assert_eq!(state.selection(), CharacterClassSelection::default());
        assert!(state.password().is_none());
        assert!(state.copy_text().is_none());
    }

    #[test]
    fn test_invalid_length_blocks_generation() {
        for (raw, expected) in [
            ("3", ValidationError::TooShort),
            ("20", ValidationError::TooLong),
            ("", ValidationError::Required),
            ("x", ValidationError::NotANumber),
        ] {
            let state = run(vec![FormAction::SetLength(raw.into()), FormAction::Submit]);
            assert_eq!(state.length_error(), Some(expected));
            assert!(!state.can_generate());
            assert!(state.password().is_none());
        }
    }

    #[test]
    fn test_regenerate_keeps_displayed_screen() {
        let state = run(vec![
            FormAction::SetLength("8".into()),
            FormAction::Submit,
            FormAction::SetClass(CharacterClass::Digits, true),
        ]);
        assert_eq!(state.screen(), Screen::PasswordDisplayed);
        assert!(state.password().is_some());
    }
}
