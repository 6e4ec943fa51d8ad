use crate::database::Transaction;
use crate::entity::{Book, BookId};
use crate::KernelError;

pub trait BookModifier<Connection: Transaction>: 'static + Sync + Send {
    fn create(&self, con: &mut Connection, book: &Book) -> error_stack::Result<(), KernelError>;
    fn update(&self, con: &mut Connection, book: &Book) -> error_stack::Result<(), KernelError>;
    fn delete(&self, con: &mut Connection, book_id: &BookId)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
