use crate::database::Transaction;
use crate::entity::{BookId, Loan, LoanId};
use crate::KernelError;

pub trait LoanQuery<Connection: Transaction>: Sync + Send + 'static {
    fn find_by_id(
        &self,
        con: &mut Connection,
        id: &LoanId,
    ) -> error_stack::Result<Option<Loan>, KernelError>;

    /// The loan currently holding the book, if any.
    fn find_open_by_book_id(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Option<Loan>, KernelError>;
}

pub trait DependOnLoanQuery<Connection: Transaction>: Sync + Send + 'static {
    type LoanQuery: LoanQuery<Connection>;
    fn loan_query(&self) -> &Self::LoanQuery;
}
