//! Character classes and pool building.

use std::fmt;

const LOWERCASE: &str = "qwertyuiopasdfghjklzxcvbnm";
const UPPERCASE: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Pool order. The pool is always concatenated in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Checkbox label.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Digits => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }
}

/// Which character classes are enabled.
///
/// The default matches a fresh form: lowercase only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassSelection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }
}

impl CharacterClassSelection {
    /// Every class disabled.
    pub fn none() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Returns a copy with one flag changed.
    pub fn with(mut self, class: CharacterClass, enabled: bool) -> Self {
        match class {
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Digits => self.digits = enabled,
            CharacterClass::Symbols => self.symbols = enabled,
        }
        self
    }

    pub fn any(&self) -> bool {
        CharacterClass::ALL.iter().any(|&c| self.is_enabled(c))
    }
}

/// Ordered characters a password is sampled from. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl From<CharacterClassSelection> for CharacterPool {
    fn from(selection: CharacterClassSelection) -> Self {
        build(selection)
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Build the pool for a selection: enabled alphabets, in class order.
pub fn build(selection: CharacterClassSelection) -> CharacterPool {
    let chars = CharacterClass::ALL
        .iter()
        .filter(|&&class| selection.is_enabled(class))
        .flat_map(|class| class.alphabet().chars())
        .collect();
    CharacterPool(chars)
}
