use crate::database::Transaction;
use crate::entity::User;
use crate::KernelError;

pub trait UserModifier<Connection: Transaction>: 'static + Sync + Send {
    fn create(&self, con: &mut Connection, user: &User) -> error_stack::Result<(), KernelError>;
    fn update(&self, con: &mut Connection, user: &User) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier<Connection: Transaction>: 'static + Sync + Send {
    type UserModifier: UserModifier<Connection>;
    fn user_modifier(&self) -> &Self::UserModifier;
}
