use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::memory::{InMemoryTransaction, LibraryStore};
use crate::error::{ConvertError, DriverError};

pub struct InMemoryBookRepository;

impl BookQuery<InMemoryTransaction> for InMemoryBookRepository {
    fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(MemBookInternal::find_by_id(con.store(), id).cloned())
    }

    fn find_all(&self, con: &mut InMemoryTransaction) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.store().books.clone())
    }
}

impl BookModifier<InMemoryTransaction> for InMemoryBookRepository {
    fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::create(con.store_mut(), book).convert_error()
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::update(con.store_mut(), book)
    }

    fn delete(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::delete(con.store_mut(), book_id)
    }
}

pub(in crate::database) struct MemBookInternal;

impl MemBookInternal {
    fn position(store: &LibraryStore, id: &BookId) -> Option<usize> {
        store.books.iter().position(|book| book.id() == id)
    }

    fn find_by_id<'a>(store: &'a LibraryStore, id: &BookId) -> Option<&'a Book> {
        store.books.iter().find(|book| book.id() == id)
    }

    fn create(store: &mut LibraryStore, book: &Book) -> Result<(), DriverError> {
        if Self::position(store, book.id()).is_some() {
            return Err(DriverError::DuplicateKey(format!(
                "book {}",
                book.id().as_ref()
            )));
        }
        store.books.push(book.clone());
        Ok(())
    }

    fn update(store: &mut LibraryStore, book: &Book) -> error_stack::Result<(), KernelError> {
        let slot = store
            .books
            .iter_mut()
            .find(|stored| stored.id() == book.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {}", book.id().as_ref()))
            })?;
        *slot = book.clone();
        Ok(())
    }

    fn delete(store: &mut LibraryStore, id: &BookId) -> error_stack::Result<(), KernelError> {
        let index = Self::position(store, id).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("book {}", id.as_ref()))
        })?;
        store.books.remove(index);
        Ok(())
    }
}
