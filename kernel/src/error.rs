use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// A required field was empty or a value was out of range.
    InvalidInput,
    /// An identifier (or a position chosen from a listing) did not resolve to a live entity.
    NotFound,
    /// The registration id is already taken by another user.
    DuplicateRegistration,
    /// The book has an open loan.
    BookUnavailable,
    /// The loan was closed earlier; nothing changed.
    AlreadyReturned,
    Concurrency,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidInput => write!(f, "Invalid input"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::DuplicateRegistration => write!(f, "Registration id already in use"),
            KernelError::BookUnavailable => write!(f, "Book is currently on loan"),
            KernelError::AlreadyReturned => write!(f, "Loan was already returned"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
