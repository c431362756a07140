//! Password generator form: character pool building, sampling, length
//! validation, and the form state machine driving the desktop UI.

pub mod app;
pub mod charset;
pub mod form;
pub mod password;
pub mod settings;
pub mod validation;

pub use charset::{CharacterClass, CharacterClassSelection, CharacterPool, build};
pub use form::{FormAction, FormState, Screen, reduce};
pub use password::{InvalidInput, PasswordError, generate, generate_password, generate_with_rng};
pub use validation::{LengthValidator, RequestedLength, ValidationError, validate};
