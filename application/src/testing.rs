use std::sync::Mutex;

use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use driver::database::{
    InMemoryBookRepository, InMemoryDatabase, InMemoryLoanRepository, InMemoryTransaction,
    InMemoryUserRepository,
};
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnBookQuery, DependOnLoanQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnLoanModifier, DependOnUserModifier};
use kernel::KernelError;

/// A clock that only moves when told to.
pub struct ManualClock(Mutex<OffsetDateTime>);

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub struct TestModule {
    database: InMemoryDatabase,
    clock: ManualClock,
}

impl TestModule {
    pub fn new() -> Self {
        Self {
            database: InMemoryDatabase::new(),
            clock: ManualClock(Mutex::new(datetime!(2024-03-01 10:00 UTC))),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }
}

impl DatabaseConnection<InMemoryTransaction> for TestModule {
    fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        self.database.transact()
    }
}

impl DependOnClock for TestModule {
    type Clock = ManualClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnBookQuery<InMemoryTransaction> for TestModule {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier<InMemoryTransaction> for TestModule {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl DependOnUserQuery<InMemoryTransaction> for TestModule {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl DependOnUserModifier<InMemoryTransaction> for TestModule {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &InMemoryUserRepository
    }
}

impl DependOnLoanQuery<InMemoryTransaction> for TestModule {
    type LoanQuery = InMemoryLoanRepository;
    fn loan_query(&self) -> &Self::LoanQuery {
        &InMemoryLoanRepository
    }
}

impl DependOnLoanModifier<InMemoryTransaction> for TestModule {
    type LoanModifier = InMemoryLoanRepository;
    fn loan_modifier(&self) -> &Self::LoanModifier {
        &InMemoryLoanRepository
    }
}
