//! Short code generation.
//!
//! Generated codes use lowercase letters and digits only, so they stay
//! URL-safe and case-insensitive-friendly.

use rand::Rng;

/// Alphabet for generated codes.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default generated code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Produces candidate shortcodes.
///
/// Candidates are not guaranteed to be unique; callers resolve collisions by
/// retrying against the store.
pub trait ShortcodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws each character uniformly from [`ALPHABET`] using the thread-local
/// CSPRNG, so codes cannot be enumerated from previous ones.
#[derive(Debug, Clone, Copy)]
pub struct RandomShortcodeGenerator {
    length: usize,
}

impl RandomShortcodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomShortcodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl ShortcodeGenerator for RandomShortcodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
