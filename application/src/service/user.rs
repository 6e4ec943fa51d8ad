use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{RegistrationId, User, UserId, UserName};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, GetUserDto, UserDto};

pub trait GetUserService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&mut connection, &id)?;

        Ok(user.map(UserDto::from))
    }

    fn list_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let users = self.user_query().find_all(&mut connection)?;
        tracing::debug!(count = users.len(), "listed users");

        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<Connection: Transaction, T> GetUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}

pub trait RegisterUserService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
{
    /// Registration ids are never reassigned: a collision is rejected and the
    /// existing user is left as it was.
    fn register_user(&self, dto: CreateUserDto) -> error_stack::Result<Uuid, KernelError> {
        let name = UserName::new(dto.name)?;
        let registration_id = RegistrationId::new(dto.registration_id)?;

        let mut connection = self.database_connection().transact()?;

        let taken = self
            .user_query()
            .find_by_registration_id(&mut connection, &registration_id)?;
        if let Some(owner) = taken {
            tracing::warn!(
                registration_id = %registration_id.as_ref(),
                "registration id already in use"
            );
            return Err(Report::new(KernelError::DuplicateRegistration).attach_printable(
                format!(
                    "registration id {} belongs to user {}",
                    registration_id.as_ref(),
                    owner.id().as_ref()
                ),
            ));
        }

        let uuid = Uuid::new_v4();
        let user = User::new(UserId::new(uuid), name, registration_id, Vec::new());
        self.user_modifier().create(&mut connection, &user)?;
        connection.commit()?;

        tracing::info!(user.id = %uuid, "registered user");
        Ok(uuid)
    }
}

impl<Connection: Transaction, T> RegisterUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
{
}
