use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IsAvailable(bool);

impl IsAvailable {
    pub fn new(value: impl Into<bool>) -> Self {
        IsAvailable(value.into())
    }
}

impl Default for IsAvailable {
    fn default() -> Self {
        Self::new(true)
    }
}
