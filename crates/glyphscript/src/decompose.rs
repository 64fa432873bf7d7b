//! Splitting a word into the letter streams that become its symbols.

/// Letters that form the secondary stream.
pub const VOWELS: &str = "aeiouy";

/// Whole words drawn as one primary symbol: (word, catalog key, applies even
/// when overrides are disabled).
const OVERRIDES: &[(&str, &str, bool)] = &[
    ("i", "first_person", true),
    ("the", "the", false),
    ("that", "the", false),
    ("they", "the", false),
];

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(letter)
}

/// How a word is to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    /// The whole word is a single primary symbol with this catalog key.
    Override(&'static str),
    /// Consonant-like letters, then vowel-like letters, each in word order.
    /// Each non-empty stream gets its own anchor.
    Streams {
        primary: Vec<char>,
        secondary: Vec<char>,
    },
}

/// Decompose a lower-cased word.
pub fn decompose(word: &str, overrides: bool) -> Decomposition {
    let replacement = OVERRIDES
        .iter()
        .find(|(text, _, always)| *text == word && (overrides || *always));
    if let Some(&(_, key, _)) = replacement {
        return Decomposition::Override(key);
    }

    let (secondary, primary): (Vec<char>, Vec<char>) = word.chars().partition(|&letter| is_vowel(letter));
    Decomposition::Streams { primary, secondary }
}

impl Decomposition {
    /// Anchor indices to reserve, relative to the word's first anchor.
    ///
    /// The word's own anchor and the next index are always reserved; the
    /// index two ahead only when the word needs two anchors and more follows.
    /// Overrides reserve nothing.
    pub fn reserved_offsets(&self, last: bool) -> Vec<u64> {
        let Decomposition::Streams { primary, secondary } = self else {
            return Vec::new();
        };

        let both = !primary.is_empty() && !secondary.is_empty();
        let mut offsets = vec![0, 1];
        if both && !last {
            offsets.push(2);
        }
        offsets
    }
}
