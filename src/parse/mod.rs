mod lexer;
pub mod visit;
pub mod token;
mod word;

use crate::error::RResult;
use lexer::{PieceKind, TermKind};
use logos::Logos;
use token::*;

pub use word::{split_words, Word};

/// Splits words into chunks around `+` and `-`, dropping anything left empty.
///
/// Quoted words are passed through whole.
pub fn tokenize<'a>(words: &[Word<'a>]) -> Vec<&'a str> {
    let mut ret = Vec::with_capacity(words.len());
    for word in words {
        match *word {
            Word::Quoted(s) => ret.push(s.trim()),
            Word::Bare(s) => {
                let mut lex = PieceKind::lexer(s);
                while lex.next().is_some() {
                    ret.push(lex.slice().trim());
                }
            }
        }
    }
    ret.retain(|chunk| !chunk.is_empty());
    tracing::trace!(?ret, "tokenized");
    ret
}

/// Operator, then constant, then dice directive; anything else is a comment.
pub fn classify(chunk: &str) -> RResult<Token<'_>> {
    Ok(match lexer::lex_whole(chunk) {
        Some(TermKind::Plus) => Operator::Plus.into(),
        Some(TermKind::Minus) => Operator::Minus.into(),
        Some(TermKind::Constant) => parse_constant(chunk)?.into(),
        Some(TermKind::Dice) => DiceDirective::from_lexeme(chunk)?.into(),
        Some(TermKind::Error) | None => Comment(chunk).into(),
    })
}

pub fn parse<'a>(words: &[Word<'a>]) -> RResult<Vec<Token<'a>>> {
    let tokens = tokenize(words)
        .into_iter()
        .map(classify)
        .collect::<RResult<Vec<_>>>()?;
    tracing::trace!(?tokens, "classified");
    Ok(tokens)
}
