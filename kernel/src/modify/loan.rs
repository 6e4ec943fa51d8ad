use crate::database::Transaction;
use crate::entity::Loan;
use crate::KernelError;

pub trait LoanModifier<Connection: Transaction>: 'static + Sync + Send {
    fn create(&self, con: &mut Connection, loan: &Loan) -> error_stack::Result<(), KernelError>;
    fn update(&self, con: &mut Connection, loan: &Loan) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnLoanModifier<Connection: Transaction>: 'static + Sync + Send {
    type LoanModifier: LoanModifier<Connection>;
    fn loan_modifier(&self) -> &Self::LoanModifier;
}
