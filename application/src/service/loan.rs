use error_stack::Report;
use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnLoanQuery, DependOnUserQuery, LoanQuery, UserQuery,
};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnLoanModifier, DependOnUserModifier, LoanModifier,
    UserModifier,
};
use kernel::prelude::entity::{
    BookId, IsAvailable, Loan, LoanDuration, LoanId, ReturnedAt, UserId,
};
use kernel::KernelError;

use crate::transfer::{CreateLoanDto, GetLoanDto, GetLoansFromUserIdDto, LoanDto, ReturnLoanDto};

fn book_title<Connection, Query>(
    query: &Query,
    con: &mut Connection,
    book_id: &BookId,
) -> error_stack::Result<Option<String>, KernelError>
where
    Connection: Transaction,
    Query: BookQuery<Connection>,
{
    Ok(query
        .find_by_id(con, book_id)?
        .map(|book| String::from(book.title().clone())))
}

pub trait GetLoanService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnClock
    + DependOnLoanQuery<Connection>
    + DependOnUserQuery<Connection>
    + DependOnBookQuery<Connection>
{
    fn get_loan(&self, dto: GetLoanDto) -> error_stack::Result<Option<LoanDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = LoanId::new(dto.id);
        let Some(loan) = self.loan_query().find_by_id(&mut connection, &id)? else {
            return Ok(None);
        };
        let title = book_title(self.book_query(), &mut connection, loan.book_id())?;

        Ok(Some(LoanDto::new(loan, title, &self.clock().now())))
    }

    /// Never mutates: the answer depends only on the loan and the current time.
    fn is_overdue(&self, dto: GetLoanDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = LoanId::new(dto.id);
        let loan = self
            .loan_query()
            .find_by_id(&mut connection, &id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("loan {}", dto.id))
            })?;

        Ok(loan.is_overdue(&self.clock().now()))
    }

    /// Every loan the user ever opened, oldest first, with overdue status as of now.
    fn history_of(
        &self,
        dto: GetLoansFromUserIdDto,
    ) -> error_stack::Result<Vec<LoanDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let user_id = UserId::new(dto.user_id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {}", dto.user_id))
            })?;

        let now = self.clock().now();
        let mut history = Vec::with_capacity(user.loan_history().len());
        for loan_id in user.loan_history() {
            let loan = self
                .loan_query()
                .find_by_id(&mut connection, loan_id)?
                .ok_or_else(|| {
                    Report::new(KernelError::Internal).attach_printable(format!(
                        "user {} references missing loan {}",
                        dto.user_id,
                        loan_id.as_ref()
                    ))
                })?;
            let title = book_title(self.book_query(), &mut connection, loan.book_id())?;
            history.push(LoanDto::new(loan, title, &now));
        }
        tracing::debug!(user.id = %dto.user_id, count = history.len(), "read loan history");

        Ok(history)
    }

    fn active_loans_of(
        &self,
        dto: GetLoansFromUserIdDto,
    ) -> error_stack::Result<Vec<LoanDto>, KernelError> {
        Ok(self
            .history_of(dto)?
            .into_iter()
            .filter(|loan| !loan.is_returned())
            .collect())
    }
}

impl<Connection: Transaction, T> GetLoanService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnClock
        + DependOnLoanQuery<Connection>
        + DependOnUserQuery<Connection>
        + DependOnBookQuery<Connection>
{
}

pub trait CreateLoanService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnClock
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
    + DependOnLoanQuery<Connection>
    + DependOnLoanModifier<Connection>
{
    /// The only place a book becomes unavailable. The loan, the user's history
    /// and the book's flag are committed together or not at all.
    fn create_loan(&self, dto: CreateLoanDto) -> error_stack::Result<LoanDto, KernelError> {
        let duration = dto
            .duration_days
            .map(LoanDuration::new)
            .transpose()?
            .unwrap_or_default();

        let mut connection = self.database_connection().transact()?;

        let user_id = UserId::new(dto.user_id);
        let mut user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {}", dto.user_id))
            })?;

        let book_id = BookId::new(dto.book_id);
        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &book_id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {}", dto.book_id))
            })?;

        let holder = self
            .loan_query()
            .find_open_by_book_id(&mut connection, &book_id)?;
        if !book.is_available() || holder.is_some() {
            tracing::warn!(book.id = %dto.book_id, "refused to lend a book already on loan");
            return Err(Report::new(KernelError::BookUnavailable)
                .attach_printable(format!("book {} is on loan", dto.book_id)));
        }

        let now = self.clock().now();
        let loan = Loan::open(
            LoanId::new(Uuid::new_v4()),
            book_id,
            user_id,
            now,
            duration,
        )?;
        self.loan_modifier().create(&mut connection, &loan)?;

        user.substitute(|user| user.loan_history.push(loan.id().clone()));
        self.user_modifier().update(&mut connection, &user)?;

        book.substitute(|book| *book.available = IsAvailable::new(false));
        self.book_modifier().update(&mut connection, &book)?;

        connection.commit()?;

        tracing::info!(
            loan.id = %loan.id().as_ref(),
            book.id = %dto.book_id,
            user.id = %dto.user_id,
            due_at = %loan.due_at().as_ref(),
            "created loan"
        );
        let title = String::from(book.title().clone());
        Ok(LoanDto::new(loan, Some(title), &now))
    }
}

impl<Connection: Transaction, T> CreateLoanService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnClock
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
        + DependOnLoanQuery<Connection>
        + DependOnLoanModifier<Connection>
{
}

pub trait ReturnLoanService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnClock
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnLoanQuery<Connection>
    + DependOnLoanModifier<Connection>
{
    /// The only place a book becomes available again. Returning a closed loan
    /// fails with [`KernelError::AlreadyReturned`] and changes nothing.
    fn return_loan(&self, dto: ReturnLoanDto) -> error_stack::Result<LoanDto, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = LoanId::new(dto.loan_id);
        let mut loan = self
            .loan_query()
            .find_by_id(&mut connection, &id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("loan {}", dto.loan_id))
            })?;

        let now = self.clock().now();
        loan.mark_returned(ReturnedAt::new(now)).map_err(|report| {
            tracing::warn!(loan.id = %dto.loan_id, "loan already returned");
            report
        })?;

        let mut book = self
            .book_query()
            .find_by_id(&mut connection, loan.book_id())?
            .ok_or_else(|| {
                Report::new(KernelError::Internal).attach_printable(format!(
                    "loan {} references missing book {}",
                    dto.loan_id,
                    loan.book_id().as_ref()
                ))
            })?;

        self.loan_modifier().update(&mut connection, &loan)?;

        book.substitute(|book| *book.available = IsAvailable::new(true));
        self.book_modifier().update(&mut connection, &book)?;

        connection.commit()?;

        tracing::info!(
            loan.id = %dto.loan_id,
            overdue_at_return = now > *loan.due_at().as_ref(),
            "returned loan"
        );
        let title = String::from(book.title().clone());
        Ok(LoanDto::new(loan, Some(title), &now))
    }
}

impl<Connection: Transaction, T> ReturnLoanService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnClock
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnLoanQuery<Connection>
        + DependOnLoanModifier<Connection>
{
}
