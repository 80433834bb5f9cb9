use logos::Logos;

/// Splits a bare word into operators and the material around them.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum PieceKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[regex(r"[^+\-]+")]
    Chunk,

    #[error]
    Error,
}

/// Recognizes a whole chunk. Only a single lexeme spanning the entire chunk counts.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TermKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[regex(r"[0-9]+")]
    Constant,
    #[regex(r"[0-9]*d[0-9]+(k[0-9]+[hl]?)?")]
    Dice,

    #[error]
    Error,
}

/// Separates a chat message into words.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum WordKind {
    #[regex(r#""[^"]*"?"#)]
    Quoted,
    #[regex(r#"[^ \t\r\n"]+"#)]
    Bare,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

/// Returns the kind of `s` if exactly one lexeme covers it.
pub(crate) fn lex_whole(s: &str) -> Option<TermKind> {
    let mut lex = TermKind::lexer(s);
    match lex.next() {
        Some(TermKind::Error) | None => None,
        Some(kind) if lex.span() == (0..s.len()) => Some(kind),
        Some(_) => None,
    }
}
