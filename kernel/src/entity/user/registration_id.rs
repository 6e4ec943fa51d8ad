use vodca::{AsRefln, Fromln};

use crate::entity::common::required;
use crate::KernelError;

/// Library card number chosen by the patron. Compared verbatim after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct RegistrationId(String);

impl RegistrationId {
    pub fn new(id: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        required("registration id", id).map(Self)
    }
}
