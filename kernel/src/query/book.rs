use crate::database::Transaction;
use crate::entity::{Book, BookId};
use crate::KernelError;

pub trait BookQuery<Connection: Transaction>: Sync + Send + 'static {
    fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    /// All books in registration order.
    fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
