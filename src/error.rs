//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when submitting an answer to the arithmetic
/// side-game.
///
/// Note that an empty or non-numeric answer is not an error; it grades as
/// [`Grade::Invalid`](crate::Grade::Invalid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// No problem has been generated yet.
    #[error("no problem has been generated")]
    NoProblem,
}
