use error_stack::Report;

use kernel::interface::query::LoanQuery;
use kernel::interface::update::LoanModifier;
use kernel::prelude::entity::{BookId, Loan, LoanId};
use kernel::KernelError;

use crate::database::memory::{InMemoryTransaction, LibraryStore};
use crate::error::{ConvertError, DriverError};

pub struct InMemoryLoanRepository;

impl LoanQuery<InMemoryTransaction> for InMemoryLoanRepository {
    fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &LoanId,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        Ok(con
            .store()
            .loans
            .iter()
            .find(|loan| loan.id() == id)
            .cloned())
    }

    fn find_open_by_book_id(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        Ok(con
            .store()
            .loans
            .iter()
            .find(|loan| loan.book_id() == book_id && !loan.is_returned())
            .cloned())
    }
}

impl LoanModifier<InMemoryTransaction> for InMemoryLoanRepository {
    fn create(
        &self,
        con: &mut InMemoryTransaction,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError> {
        MemLoanInternal::create(con.store_mut(), loan).convert_error()
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError> {
        let slot = con
            .store_mut()
            .loans
            .iter_mut()
            .find(|stored| stored.id() == loan.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("loan {}", loan.id().as_ref()))
            })?;
        *slot = loan.clone();
        Ok(())
    }
}

pub(in crate::database) struct MemLoanInternal;

impl MemLoanInternal {
    fn create(store: &mut LibraryStore, loan: &Loan) -> Result<(), DriverError> {
        if store.loans.iter().any(|stored| stored.id() == loan.id()) {
            return Err(DriverError::DuplicateKey(format!(
                "loan {}",
                loan.id().as_ref()
            )));
        }
        store.loans.push(loan.clone());
        Ok(())
    }
}
