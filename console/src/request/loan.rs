use application::transfer::{CreateLoanDto, ReturnLoanDto};
use kernel::prelude::entity::LoanDuration;
use kernel::KernelError;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};
use crate::request::Selection;

#[derive(Debug)]
pub struct CreateLoanRequest {
    user_id: Uuid,
    book_id: Uuid,
    duration: LoanDuration,
}

impl CreateLoanRequest {
    pub fn new(user_id: Uuid, book_id: Uuid, duration: LoanDuration) -> Self {
        Self {
            user_id,
            book_id,
            duration,
        }
    }
}

#[derive(Debug)]
pub struct ReturnLoanRequest {
    selection: Selection,
    answer: String,
}

impl ReturnLoanRequest {
    pub fn new(selection: Selection, answer: String) -> Self {
        Self { selection, answer }
    }
}

pub struct LoanTransformer;

impl Intake<CreateLoanRequest> for LoanTransformer {
    type To = CreateLoanDto;
    fn emit(&self, input: CreateLoanRequest) -> Self::To {
        CreateLoanDto {
            user_id: input.user_id,
            book_id: input.book_id,
            duration_days: Some(*input.duration.as_ref()),
        }
    }
}

impl TryIntake<ReturnLoanRequest> for LoanTransformer {
    type To = ReturnLoanDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: ReturnLoanRequest) -> Result<Self::To, Self::Error> {
        let loan_id = input.selection.pick(&input.answer)?;
        Ok(ReturnLoanDto { loan_id })
    }
}
