mod borrowed_at;
mod due_at;
mod duration;
mod id;
mod returned_at;

pub use self::{borrowed_at::*, due_at::*, duration::*, id::*, returned_at::*};
use destructure::Destructure;
use error_stack::Report;
use time::OffsetDateTime;
use vodca::References;

use crate::entity::{BookId, UserId};
use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoanState {
    Open,
    Returned,
}

/// A book lent to a user. `book_id` and `user_id` are lookup keys into the
/// catalog and directory, they do not own anything.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Loan {
    id: LoanId,
    book_id: BookId,
    user_id: UserId,
    borrowed_at: BorrowedAt,
    due_at: DueAt,
    returned_at: Option<ReturnedAt>,
}

impl Loan {
    pub fn new(
        id: LoanId,
        book_id: BookId,
        user_id: UserId,
        borrowed_at: BorrowedAt,
        due_at: DueAt,
        returned_at: Option<ReturnedAt>,
    ) -> Self {
        Self {
            id,
            book_id,
            user_id,
            borrowed_at,
            due_at,
            returned_at,
        }
    }

    /// Opens a loan at `borrowed_at`, due exactly `duration` days later.
    pub fn open(
        id: LoanId,
        book_id: BookId,
        user_id: UserId,
        borrowed_at: OffsetDateTime,
        duration: LoanDuration,
    ) -> error_stack::Result<Self, KernelError> {
        let due_at = borrowed_at
            .checked_add(duration.as_duration())
            .ok_or_else(|| {
                Report::new(KernelError::InvalidInput)
                    .attach_printable("due date is out of the supported range")
            })?;
        Ok(Self::new(
            id,
            book_id,
            user_id,
            BorrowedAt::new(borrowed_at),
            DueAt::new(due_at),
            None,
        ))
    }

    pub fn state(&self) -> LoanState {
        match self.returned_at {
            None => LoanState::Open,
            Some(_) => LoanState::Returned,
        }
    }

    pub fn is_returned(&self) -> bool {
        self.state() == LoanState::Returned
    }

    pub fn is_overdue(&self, now: &OffsetDateTime) -> bool {
        !self.is_returned() && now > self.due_at.as_ref()
    }

    /// Closes the loan. Returned is terminal: a second call fails with
    /// [`KernelError::AlreadyReturned`] and keeps the first timestamp.
    pub fn mark_returned(&mut self, at: ReturnedAt) -> error_stack::Result<(), KernelError> {
        if let Some(returned_at) = &self.returned_at {
            return Err(Report::new(KernelError::AlreadyReturned).attach_printable(format!(
                "loan {} was returned at {}",
                self.id.as_ref(),
                returned_at.as_ref()
            )));
        }
        self.returned_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::Duration;
    use uuid::Uuid;

    use crate::entity::{BookId, Loan, LoanDuration, LoanId, LoanState, ReturnedAt, UserId};
    use crate::KernelError;

    fn open_loan(days: i64) -> error_stack::Result<Loan, KernelError> {
        Loan::open(
            LoanId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            UserId::new(Uuid::new_v4()),
            datetime!(2024-03-01 10:30 UTC),
            LoanDuration::new(days)?,
        )
    }

    #[test]
    fn due_date_is_borrow_date_plus_duration() -> error_stack::Result<(), KernelError> {
        for days in [1, 7, 30, 365] {
            let loan = open_loan(days)?;
            assert_eq!(
                *loan.due_at().as_ref(),
                *loan.borrowed_at().as_ref() + Duration::days(days)
            );
        }
        Ok(())
    }

    #[test]
    fn overdue_only_strictly_after_due_date() -> error_stack::Result<(), KernelError> {
        let loan = open_loan(7)?;
        let due = *loan.due_at().as_ref();
        assert!(!loan.is_overdue(&(due - Duration::seconds(1))));
        assert!(!loan.is_overdue(&due));
        assert!(loan.is_overdue(&(due + Duration::seconds(1))));
        Ok(())
    }

    #[test]
    fn returned_loan_is_never_overdue() -> error_stack::Result<(), KernelError> {
        let mut loan = open_loan(7)?;
        let late = *loan.due_at().as_ref() + Duration::days(3);
        loan.mark_returned(ReturnedAt::new(late))?;
        assert_eq!(loan.state(), LoanState::Returned);
        assert!(!loan.is_overdue(&late));
        assert!(!loan.is_overdue(&(late + Duration::days(100))));
        Ok(())
    }

    #[test]
    fn second_return_is_rejected_and_keeps_timestamp() -> error_stack::Result<(), KernelError> {
        let mut loan = open_loan(7)?;
        let first = datetime!(2024-03-05 09:00 UTC);
        loan.mark_returned(ReturnedAt::new(first))?;

        let error = loan
            .mark_returned(ReturnedAt::new(datetime!(2024-03-06 09:00 UTC)))
            .expect_err("second return must fail");
        assert_eq!(error.current_context(), &KernelError::AlreadyReturned);
        assert_eq!(loan.returned_at(), &Some(ReturnedAt::new(first)));
        Ok(())
    }
}
