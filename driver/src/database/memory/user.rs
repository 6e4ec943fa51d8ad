use error_stack::Report;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{RegistrationId, User, UserId};
use kernel::KernelError;

use crate::database::memory::{InMemoryTransaction, LibraryStore};
use crate::error::{ConvertError, DriverError};

pub struct InMemoryUserRepository;

impl UserQuery<InMemoryTransaction> for InMemoryUserRepository {
    fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con
            .store()
            .users
            .iter()
            .find(|user| user.id() == id)
            .cloned())
    }

    fn find_by_registration_id(
        &self,
        con: &mut InMemoryTransaction,
        registration_id: &RegistrationId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con
            .store()
            .users
            .iter()
            .find(|user| user.registration_id() == registration_id)
            .cloned())
    }

    fn find_all(&self, con: &mut InMemoryTransaction) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(con.store().users.clone())
    }
}

impl UserModifier<InMemoryTransaction> for InMemoryUserRepository {
    fn create(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        MemUserInternal::create(con.store_mut(), user).convert_error()
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        let slot = con
            .store_mut()
            .users
            .iter_mut()
            .find(|stored| stored.id() == user.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {}", user.id().as_ref()))
            })?;
        *slot = user.clone();
        Ok(())
    }
}

pub(in crate::database) struct MemUserInternal;

impl MemUserInternal {
    /// Keys are the generated id and the registration id; both must be free.
    fn create(store: &mut LibraryStore, user: &User) -> Result<(), DriverError> {
        let taken = store.users.iter().any(|stored| {
            stored.id() == user.id() || stored.registration_id() == user.registration_id()
        });
        if taken {
            return Err(DriverError::DuplicateKey(format!(
                "user {} / registration {}",
                user.id().as_ref(),
                user.registration_id().as_ref()
            )));
        }
        store.users.push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{LoanId, RegistrationId, User, UserId, UserName};
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::database::{InMemoryDatabase, InMemoryUserRepository};

    fn user(name: &str, registration_id: &str) -> error_stack::Result<User, KernelError> {
        Ok(User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new(name)?,
            RegistrationId::new(registration_id)?,
            Vec::new(),
        ))
    }

    #[test]
    fn basic_modification() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact()?;
        let ana = user("Ana", "M001")?;
        InMemoryUserRepository.create(&mut con, &ana)?;

        let by_registration = InMemoryUserRepository
            .find_by_registration_id(&mut con, &RegistrationId::new("M001")?)?;
        assert_eq!(by_registration, Some(ana.clone()));

        let mut borrowed = ana.clone();
        let loan_id = LoanId::new(Uuid::new_v4());
        borrowed.substitute(|user| user.loan_history.push(loan_id.clone()));
        InMemoryUserRepository.update(&mut con, &borrowed)?;

        let found = InMemoryUserRepository
            .find_by_id(&mut con, ana.id())?
            .expect("user was created");
        assert_eq!(found.loan_history(), &vec![loan_id]);
        Ok(())
    }

    #[test]
    fn registration_id_is_a_unique_key() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact()?;
        InMemoryUserRepository.create(&mut con, &user("Bea", "M002")?)?;

        let error = InMemoryUserRepository
            .create(&mut con, &user("Cid", "M002")?)
            .expect_err("registration id collision");
        assert_eq!(error.current_context(), &KernelError::Internal);
        assert_eq!(InMemoryUserRepository.find_all(&mut con)?.len(), 1);
        Ok(())
    }
}
