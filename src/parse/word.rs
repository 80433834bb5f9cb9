use super::lexer::WordKind;
use logos::Logos;

/// One whitespace-delimited word of a command, as handed over by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Word<'a> {
    /// Split on `+` and `-` before classification.
    Bare(&'a str),
    /// Came from a quoted run. Kept whole, so digits inside are never reparsed on their own.
    Quoted(&'a str),
}

impl<'a> Word<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Bare(s) | Self::Quoted(s) => s,
        }
    }
}

impl<'a> From<&'a str> for Word<'a> {
    /// Whitespace inside a single word can only come from a quoted run.
    fn from(s: &'a str) -> Self {
        if s.contains(char::is_whitespace) {
            Self::Quoted(s)
        } else {
            Self::Bare(s)
        }
    }
}

/// Splits a message into words, treating each double-quoted run as a single word.
pub fn split_words(s: &str) -> Vec<Word<'_>> {
    let mut lex = WordKind::lexer(s);
    let mut ret = Vec::new();
    while let Some(kind) = lex.next() {
        let slice = lex.slice();
        match kind {
            WordKind::Quoted => {
                let inner = slice.strip_prefix('"').unwrap_or(slice);
                let inner = inner.strip_suffix('"').unwrap_or(inner);
                ret.push(Word::Quoted(inner));
            }
            WordKind::Bare | WordKind::Error => ret.push(Word::Bare(slice)),
        }
    }
    ret
}
