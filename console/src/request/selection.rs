use error_stack::{Report, ResultExt};
use kernel::KernelError;
use uuid::Uuid;

/// Ids in the order they were just listed. Consumed by the next pick.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Selection(Vec<Uuid>);

impl Selection {
    pub fn new(ids: Vec<Uuid>) -> Self {
        Self(ids)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves a 1-based ordinal typed by the operator.
    pub fn pick(self, answer: &str) -> error_stack::Result<Uuid, KernelError> {
        let answer = answer.trim();
        let ordinal = answer
            .parse::<usize>()
            .change_context(KernelError::InvalidInput)
            .attach_printable_lazy(|| format!("`{answer}` is not a number"))?;
        ordinal
            .checked_sub(1)
            .and_then(|index| self.0.get(index).copied())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!(
                    "{ordinal} is not between 1 and {}",
                    self.0.len()
                ))
            })
    }
}
