use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructLoan, Loan};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoanDto {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: Uuid,
    /// Resolved when the loan is read. `None` once the book has left the catalog.
    pub book_title: Option<String>,
    pub borrowed_at: OffsetDateTime,
    pub due_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    /// Evaluated against the clock at read time.
    pub overdue: bool,
}

impl LoanDto {
    pub fn new(loan: Loan, book_title: Option<String>, now: &OffsetDateTime) -> Self {
        let overdue = loan.is_overdue(now);
        let DestructLoan {
            id,
            book_id,
            user_id,
            borrowed_at,
            due_at,
            returned_at,
        } = loan.into_destruct();
        Self {
            id: id.into(),
            book_id: book_id.into(),
            user_id: user_id.into(),
            book_title,
            borrowed_at: borrowed_at.into(),
            due_at: due_at.into(),
            returned_at: returned_at.map(OffsetDateTime::from),
            overdue,
        }
    }

    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

pub struct GetLoanDto {
    pub id: Uuid,
}

pub struct GetLoansFromUserIdDto {
    pub user_id: Uuid,
}

pub struct CreateLoanDto {
    pub user_id: Uuid,
    pub book_id: Uuid,
    /// Falls back to the default loan duration.
    pub duration_days: Option<i64>,
}

pub struct ReturnLoanDto {
    pub loan_id: Uuid,
}
