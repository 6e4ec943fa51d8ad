use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};

use error_stack::Report;
use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// What the operator sees when an action fails. The full report only goes to the log.
#[derive(Debug)]
pub struct ErrorMessage(Report<KernelError>);

impl ErrorMessage {
    /// Integrity failures end the session, everything else is shown and the menu continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self.0.current_context(), KernelError::Internal)
    }

    pub fn into_report(self) -> Report<KernelError> {
        self.0
    }
}

impl From<Report<KernelError>> for ErrorMessage {
    fn from(e: Report<KernelError>) -> Self {
        ErrorMessage(e)
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self.0.current_context() {
            KernelError::InvalidInput => "Invalid input.",
            KernelError::NotFound => "No such entry.",
            KernelError::DuplicateRegistration => "That registration id is already in use.",
            KernelError::BookUnavailable => "That book is currently on loan.",
            KernelError::AlreadyReturned => "That loan has already been returned.",
            KernelError::Concurrency => "The library changed meanwhile, please try again.",
            KernelError::Internal => "Internal error, see the log for details.",
        };
        write!(f, "{message}")
    }
}
