use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("I don't understand `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` is too large")]
    NumberTooLarge(String),
    #[error("`{0}` rolls no dice")]
    NoDice(String),
    #[error("`{0}` has no sides")]
    NoSides(String),
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("the sum is too large")]
    Overflow,
    #[error("I can't process `{0}`: expected `+` or `-` before it")]
    MissingOperator(String),
}

pub type RResult<T> = Result<T, RollError>;
