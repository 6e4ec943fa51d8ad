use vodca::{AsRefln, Fromln};

use crate::entity::common::required;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        required("title", title).map(Self)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::BookTitle;
    use crate::KernelError;

    #[test]
    fn trims_surrounding_whitespace() -> error_stack::Result<(), KernelError> {
        let title = BookTitle::new("  Dune ")?;
        assert_eq!(title.as_ref(), "Dune");
        Ok(())
    }

    #[test]
    fn rejects_blank_title() {
        let result = BookTitle::new("   ");
        assert!(matches!(
            result.map_err(|e| *e.current_context()),
            Err(KernelError::InvalidInput)
        ));
    }
}
