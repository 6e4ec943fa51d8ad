use std::ops::Deref;
use std::sync::Arc;

use driver::clock::SystemClock;
use driver::database::{
    InMemoryBookRepository, InMemoryDatabase, InMemoryLoanRepository, InMemoryTransaction,
    InMemoryUserRepository,
};
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnBookQuery, DependOnLoanQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnLoanModifier, DependOnUserModifier};
use kernel::prelude::entity::LoanDuration;
use kernel::KernelError;
use vodca::References;

use crate::config::Config;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new(config: &Config) -> Self {
        Self(Arc::new(Handler::init(config)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
    clock: SystemClock,
    loan_duration: LoanDuration,
}

impl Handler {
    pub fn init(config: &Config) -> Self {
        Self {
            database: InMemoryDatabase::new(),
            clock: SystemClock,
            loan_duration: *config.loan_duration(),
        }
    }
}

impl DatabaseConnection<InMemoryTransaction> for Handler {
    fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        self.database.transact()
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnBookQuery<InMemoryTransaction> for Handler {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier<InMemoryTransaction> for Handler {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl DependOnUserQuery<InMemoryTransaction> for Handler {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl DependOnUserModifier<InMemoryTransaction> for Handler {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &InMemoryUserRepository
    }
}

impl DependOnLoanQuery<InMemoryTransaction> for Handler {
    type LoanQuery = InMemoryLoanRepository;
    fn loan_query(&self) -> &Self::LoanQuery {
        &InMemoryLoanRepository
    }
}

impl DependOnLoanModifier<InMemoryTransaction> for Handler {
    type LoanModifier = InMemoryLoanRepository;
    fn loan_modifier(&self) -> &Self::LoanModifier {
        &InMemoryLoanRepository
    }
}
