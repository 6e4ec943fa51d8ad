use std::sync::{Arc, Mutex};

use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Book, Loan, User};
use kernel::KernelError;

use crate::error::ConvertError;

pub use self::{book::*, loan::*, user::*};

mod book;
mod loan;
mod user;

/// The three collections, each kept in insertion order.
#[derive(Debug, Clone, Default)]
pub(in crate::database) struct LibraryStore {
    pub(in crate::database) books: Vec<Book>,
    pub(in crate::database) users: Vec<User>,
    pub(in crate::database) loans: Vec<Loan>,
}

#[derive(Debug, Default)]
struct StoreState {
    version: u64,
    store: LibraryStore,
}

/// Process-local storage shared by every clone. All collections sit behind a
/// single lock so that a loan and the availability of its book always change
/// together.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatabaseConnection<InMemoryTransaction> for InMemoryDatabase {
    fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        let state = self.state.lock().convert_error()?;
        Ok(InMemoryTransaction {
            origin: Arc::clone(&self.state),
            base_version: state.version,
            staged: state.store.clone(),
        })
    }
}

/// A private copy of the store taken at `transact` time. `commit` publishes
/// it only if nobody else committed in between.
#[derive(Debug)]
pub struct InMemoryTransaction {
    origin: Arc<Mutex<StoreState>>,
    base_version: u64,
    staged: LibraryStore,
}

impl InMemoryTransaction {
    pub(in crate::database) fn store(&self) -> &LibraryStore {
        &self.staged
    }

    pub(in crate::database) fn store_mut(&mut self) -> &mut LibraryStore {
        &mut self.staged
    }
}

impl Transaction for InMemoryTransaction {
    fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self {
            origin,
            base_version,
            staged,
        } = self;
        let mut state = origin.lock().convert_error()?;
        if state.version != base_version {
            tracing::warn!(
                expected = base_version,
                actual = state.version,
                "rejecting commit on a stale snapshot"
            );
            return Err(Report::new(KernelError::Concurrency).attach_printable(format!(
                "store changed since version {base_version} (now {})",
                state.version
            )));
        }
        state.store = staged;
        state.version += 1;
        tracing::debug!(version = state.version, "committed");
        Ok(())
    }

    fn roll_back(self) -> error_stack::Result<(), KernelError> {
        tracing::debug!(version = self.base_version, "rolled back");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        Book, BookAuthor, BookId, BookTitle, IsAvailable, PublishedYear,
    };
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::database::{InMemoryBookRepository, InMemoryDatabase};

    fn book(title: &str) -> error_stack::Result<Book, KernelError> {
        Ok(Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new(title)?,
            BookAuthor::default(),
            PublishedYear::default(),
            IsAvailable::new(true),
        ))
    }

    #[test]
    fn commit_publishes_changes() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact()?;
        InMemoryBookRepository.create(&mut con, &book("Dune")?)?;
        con.commit()?;

        let mut con = db.transact()?;
        assert_eq!(InMemoryBookRepository.find_all(&mut con)?.len(), 1);
        Ok(())
    }

    #[test]
    fn uncommitted_changes_are_discarded() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact()?;
        InMemoryBookRepository.create(&mut con, &book("Dune")?)?;
        drop(con);

        let mut con = db.transact()?;
        InMemoryBookRepository.create(&mut con, &book("Emma")?)?;
        con.roll_back()?;

        let mut con = db.transact()?;
        assert!(InMemoryBookRepository.find_all(&mut con)?.is_empty());
        Ok(())
    }

    #[test]
    fn stale_snapshot_cannot_commit() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut first = db.transact()?;
        let mut second = db.clone().transact()?;

        InMemoryBookRepository.create(&mut first, &book("Dune")?)?;
        InMemoryBookRepository.create(&mut second, &book("Emma")?)?;
        first.commit()?;

        let error = second.commit().expect_err("second writer must lose");
        assert_eq!(error.current_context(), &KernelError::Concurrency);

        let mut con = db.transact()?;
        let titles = InMemoryBookRepository
            .find_all(&mut con)?
            .into_iter()
            .map(|book| book.title().as_ref().clone())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Dune".to_string()]);
        Ok(())
    }

    #[test]
    fn snapshot_does_not_see_later_commits() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut reader = db.transact()?;

        let mut writer = db.transact()?;
        InMemoryBookRepository.create(&mut writer, &book("Dune")?)?;
        writer.commit()?;

        assert!(InMemoryBookRepository.find_all(&mut reader)?.is_empty());
        Ok(())
    }

    #[test]
    fn poisoned_store_is_an_internal_error() {
        let db = InMemoryDatabase::new();
        let state = std::sync::Arc::clone(&db.state);
        let panicked = std::thread::spawn(move || {
            let _guard = state.lock();
            panic!("writer died holding the store lock");
        })
        .join();
        assert!(panicked.is_err());

        let error = db.transact().expect_err("poisoned lock");
        assert_eq!(error.current_context(), &KernelError::Internal);
    }
}
