//! Splits sentence text into the words and marks the composer consumes.

/// One unit of input for the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A lower-cased word. `last` is set only for the final token of the input.
    Word { text: String, last: bool },
    /// A punctuation mark, carrying the catalog key of its symbol.
    Mark(&'static str),
}

/// Catalog key for a punctuation character, if it is one.
fn mark_key(character: char) -> Option<&'static str> {
    match character {
        '.' => Some("."),
        ':' => Some(":"),
        _ => None,
    }
}

/// Scan `text` into words and marks.
///
/// Whitespace ends the current word; a mark ends it too and follows it as its
/// own token. A word is `last` when nothing at all follows it. Any other
/// character, including ones no catalog knows about, is part of a word.
///
/// ```
/// use glyphscript::{scan, Token};
///
/// let tokens = scan("Hi: you");
/// assert_eq!(tokens, vec![
///     Token::Word { text: "hi".into(), last: false },
///     Token::Mark(":"),
///     Token::Word { text: "you".into(), last: true },
/// ]);
/// ```
pub fn scan(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    let flush = |word: &mut String, tokens: &mut Vec<Token>| {
        if !word.is_empty() {
            tokens.push(Token::Word {
                text: std::mem::take(word),
                last: false,
            });
        }
    };

    for character in text.chars() {
        if character.is_whitespace() {
            flush(&mut word, &mut tokens);
        } else if let Some(key) = mark_key(character) {
            flush(&mut word, &mut tokens);
            tokens.push(Token::Mark(key));
        } else {
            word.extend(character.to_lowercase());
        }
    }

    flush(&mut word, &mut tokens);

    if let Some(Token::Word { last, .. }) = tokens.last_mut() {
        *last = true;
    }

    tokens
}
