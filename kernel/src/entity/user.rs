mod id;
mod name;
mod registration_id;

pub use self::{id::*, name::*, registration_id::*};
use crate::entity::LoanId;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation, References)]
pub struct User {
    id: UserId,
    name: UserName,
    registration_id: RegistrationId,
    /// Every loan ever opened by this user, oldest first.
    loan_history: Vec<LoanId>,
}

impl User {
    pub fn new(
        id: UserId,
        name: UserName,
        registration_id: RegistrationId,
        loan_history: Vec<LoanId>,
    ) -> Self {
        Self {
            id,
            name,
            registration_id,
            loan_history,
        }
    }
}
