use application::transfer::{CreateUserDto, GetLoansFromUserIdDto};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::request::Selection;

#[derive(Debug)]
pub struct RegisterUserRequest {
    name: String,
    registration_id: String,
}

impl RegisterUserRequest {
    pub fn new(name: String, registration_id: String) -> Self {
        Self {
            name,
            registration_id,
        }
    }
}

/// Picks a user out of the last listing to look at their loans.
#[derive(Debug)]
pub struct UserLoansRequest {
    selection: Selection,
    answer: String,
}

impl UserLoansRequest {
    pub fn new(selection: Selection, answer: String) -> Self {
        Self { selection, answer }
    }
}

pub struct UserTransformer;

impl Intake<RegisterUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, input: RegisterUserRequest) -> Self::To {
        CreateUserDto {
            name: input.name,
            registration_id: input.registration_id,
        }
    }
}

impl TryIntake<UserLoansRequest> for UserTransformer {
    type To = GetLoansFromUserIdDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: UserLoansRequest) -> Result<Self::To, Self::Error> {
        let user_id = input.selection.pick(&input.answer)?;
        Ok(GetLoansFromUserIdDto { user_id })
    }
}
