use crate::KernelError;

/// Opens a unit of work. Everything read or written through the returned
/// transaction becomes visible to others only after [`Transaction::commit`].
pub trait DatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    fn transact(&self) -> error_stack::Result<Connection, KernelError>;
}

pub trait DependOnDatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Connection>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<Connection, T> DependOnDatabaseConnection<Connection> for T
where
    Connection: Transaction,
    T: DatabaseConnection<Connection>,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// Dropping a transaction without committing discards its changes.
pub trait Transaction: 'static + Send {
    fn commit(self) -> error_stack::Result<(), KernelError>;
    fn roll_back(self) -> error_stack::Result<(), KernelError>;
}
