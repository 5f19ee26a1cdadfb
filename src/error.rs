use thiserror::Error;

/// Errors returned by the statistics queries of a [`StatSet`](crate::StatSet)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatError {
    /// The query needs at least one sample
    #[error("empty set")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, StatError>;
