//! Form state for the generator screen.
//!
//! `FormState` is never mutated in place: every user action goes through
//! [`reduce`], which returns the next state.

use zeroize::Zeroizing;

use crate::charset::{CharacterClass, CharacterClassSelection, CharacterPool, build};
use crate::password::{InvalidInput, PasswordError, estimate_entropy, generate};
use crate::validation::{LengthValidator, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Idle,
    Configuring,
    PasswordDisplayed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetClass(CharacterClass, bool),
    SetLength(String),
    Submit,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    validator: LengthValidator,
    selection: CharacterClassSelection,
    length_input: String,
    length_error: Option<ValidationError>,
    generation_error: Option<PasswordError>,
    password: Option<Zeroizing<String>>,
    /// Size of the pool `password` was drawn from.
    password_pool_len: usize,
    screen: Screen,
}

impl FormState {
    pub fn new(validator: LengthValidator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> CharacterClassSelection {
        self.selection
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn length_error(&self) -> Option<ValidationError> {
        self.length_error
    }

    pub fn generation_error(&self) -> Option<&PasswordError> {
        self.generation_error.as_ref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.as_str())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn validator(&self) -> LengthValidator {
        self.validator
    }

    /// Entropy of the displayed password, from the pool it was drawn from
    /// rather than the current selection.
    pub fn password_entropy(&self) -> Option<f64> {
        self.password()
            .map(|p| estimate_entropy(self.password_pool_len, p.chars().count()))
    }

    pub fn pool(&self) -> CharacterPool {
        build(self.selection)
    }

    /// Generate stays disabled while the length field shows an error.
    pub fn can_generate(&self) -> bool {
        self.length_error.is_none()
    }

    /// Text for the copy action, `None` when there is nothing to copy.
    pub fn copy_text(&self) -> Option<&str> {
        self.password().filter(|p| !p.is_empty())
    }

    fn configuring(&self) -> Screen {
        match self.screen {
            Screen::Idle => Screen::Configuring,
            other => other,
        }
    }
}

/// Applies one action. `random` is only consumed by a successful `Submit`.
pub fn reduce(state: &FormState, action: FormAction, random: impl FnMut() -> f64) -> FormState {
    match action {
        FormAction::SetClass(class, enabled) => FormState {
            selection: state.selection.with(class, enabled),
            generation_error: None,
            screen: state.configuring(),
            ..state.clone()
        },
        FormAction::SetLength(raw) => FormState {
            length_error: state.validator.validate(&raw).err(),
            length_input: raw,
            screen: state.configuring(),
            ..state.clone()
        },
        FormAction::Submit => submit(state, random),
        FormAction::Reset => FormState {
            screen: Screen::Configuring,
            ..FormState::new(state.validator)
        },
    }
}

fn submit(state: &FormState, random: impl FnMut() -> f64) -> FormState {
    let length = match state.validator.validate(&state.length_input) {
        Ok(length) => length,
        Err(e) => {
            return FormState {
                length_error: Some(e),
                screen: state.configuring(),
                ..state.clone()
            };
        }
    };

    let pool = state.pool();
    match generate(&pool, length.get(), random) {
        Ok(password) => FormState {
            length_error: None,
            generation_error: None,
            password: Some(Zeroizing::new(password)),
            password_pool_len: pool.len(),
            screen: Screen::PasswordDisplayed,
            ..state.clone()
        },
        Err(e) => FormState {
            length_error: None,
            generation_error: Some(e),
            screen: state.configuring(),
            ..state.clone()
        },
    }
}

/// Inline message for a failed generation.
pub fn generation_error_message(err: &PasswordError) -> &'static str {
    match err {
        PasswordError::InvalidInput(InvalidInput::EmptyPool) => "Select at least one character type",
        PasswordError::InvalidInput(InvalidInput::ZeroLength) => "Length must be at least 1",
    }
}
