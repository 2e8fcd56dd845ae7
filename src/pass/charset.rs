//! Character classes, password rules and keyspace building.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// Every printable ASCII symbol except space.
pub const SPECIAL: &str = "`~!@#$%^&*()+=_-[]{}:;'\"\\|,./<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharacterClass {
    /// Keyspace concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Name used in settings files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lower => "lower",
            CharacterClass::Upper => "upper",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CharacterClass::Lower),
            "upper" | "uppercase" => Ok(CharacterClass::Upper),
            "digit" | "digits" | "numeric" => Ok(CharacterClass::Digit),
            "special" | "symbols" => Ok(CharacterClass::Special),
            other => Err(Error::UnknownClass(other.to_string())),
        }
    }
}

/// Which character classes a password may draw from.
///
/// `Default` enables every class. Rules assembled explicitly start from
/// [`PasswordRules::none`], so any class not mentioned stays disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    enabled: [bool; 4],
}

impl PasswordRules {
    pub const fn none() -> Self {
        Self { enabled: [false; 4] }
    }

    pub const fn all() -> Self {
        Self { enabled: [true; 4] }
    }

    pub fn with(mut self, class: CharacterClass, enabled: bool) -> Self {
        self.set(class, enabled);
        self
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        self.enabled[class.index()] = enabled;
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled[class.index()]
    }

    /// Enabled classes in keyspace order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
    }

    /// Parse a comma separated list such as `"digits,lower"`. Listed classes
    /// are enabled, all others disabled.
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<CharacterClass>().map(|c| (c, true)))
            .collect()
    }
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<(CharacterClass, bool)> for PasswordRules {
    fn from_iter<I: IntoIterator<Item = (CharacterClass, bool)>>(iter: I) -> Self {
        let mut rules = PasswordRules::none();
        for (class, enabled) in iter {
            rules.set(class, enabled);
        }
        rules
    }
}

/// Ordered, non-empty set of characters a generated string may contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    chars: Vec<char>,
}

impl Keyspace {
    /// Use `chars` as given. Repeated characters are kept, and weigh that
    /// character proportionally.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(Error::EmptyKeyspace);
        }
        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Bits of entropy in a string of `length` uniform draws.
    ///
    /// Counts characters, not indices: a character listed twice is drawn twice
    /// as often, so `"aab"` gives about 0.918 bits per position, not log2(3).
    pub fn entropy_bits(&self, length: usize) -> f64 {
        if self.chars.is_empty() {
            return 0.0;
        }
        let mut counts: HashMap<char, usize> = HashMap::new();
        for &c in &self.chars {
            *counts.entry(c).or_default() += 1;
        }
        // H = log2(n) - (1/n) * sum(c * log2(c)); exactly log2(n) when all distinct
        let n = self.chars.len() as f64;
        let weighted: f64 = counts
            .values()
            .map(|&c| c as f64 * (c as f64).log2())
            .sum();
        length as f64 * (n.log2() - weighted / n)
    }
}

/// All 94 printable ASCII characters except space.
impl Default for Keyspace {
    fn default() -> Self {
        Self {
            chars: CharacterClass::ALL
                .iter()
                .flat_map(|c| c.alphabet().chars())
                .collect(),
        }
    }
}

impl fmt::Display for Keyspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the keyspace for `rules`, concatenating enabled alphabets in
/// lower, upper, digit, special order.
pub fn build(rules: &PasswordRules) -> Result<Keyspace> {
    let chars: Vec<char> = rules
        .enabled_classes()
        .flat_map(|c| c.alphabet().chars())
        .collect();

    if chars.is_empty() {
        return Err(Error::EmptyKeyspace);
    }

    debug!(
        "keyspace: {} chars from [{}]",
        chars.len(),
        rules
            .enabled_classes()
            .map(CharacterClass::name)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(Keyspace { chars })
}
