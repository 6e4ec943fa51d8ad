use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

pub const DEFAULT_LOAN_DAYS: i64 = 7;
pub const MAX_LOAN_DAYS: i64 = 365;

/// Length of a loan in whole days.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct LoanDuration(i64);

impl LoanDuration {
    pub fn new(days: impl Into<i64>) -> error_stack::Result<Self, KernelError> {
        let days = days.into();
        if !(1..=MAX_LOAN_DAYS).contains(&days) {
            return Err(Report::new(KernelError::InvalidInput).attach_printable(format!(
                "loan duration must be between 1 and {MAX_LOAN_DAYS} days, got {days}"
            )));
        }
        Ok(Self(days))
    }

    pub fn as_duration(&self) -> time::Duration {
        time::Duration::days(self.0)
    }
}

impl Default for LoanDuration {
    fn default() -> Self {
        Self(DEFAULT_LOAN_DAYS)
    }
}
