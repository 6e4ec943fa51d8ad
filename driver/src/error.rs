use std::sync::PoisonError;

use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}

impl<G> From<PoisonError<G>> for DriverError {
    fn from(value: PoisonError<G>) -> Self {
        Self::Poisoned(value.to_string())
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, G> ConvertError for Result<T, PoisonError<G>> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            Report::from(DriverError::from(error)).change_context(KernelError::Internal)
        })
    }
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::from(error).change_context(KernelError::Internal))
    }
}
