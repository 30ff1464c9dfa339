use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedianError {
    #[error("median queried on an empty tracker")]
    EmptyQuery,
    #[error("no median is tracked for key `{0}`")]
    UnknownKey(String),
}
