use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, User};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub registration_id: String,
    pub loans: Vec<Uuid>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            name,
            registration_id,
            loan_history,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            registration_id: registration_id.into(),
            loans: loan_history.into_iter().map(Uuid::from).collect(),
        }
    }
}

pub struct GetUserDto {
    pub id: Uuid,
}

pub struct CreateUserDto {
    pub name: String,
    pub registration_id: String,
}
