use vodca::{AsRefln, Fromln};

pub const UNKNOWN_YEAR: &str = "N/A";

/// Free-form display value; never parsed as a number.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct PublishedYear(String);

impl PublishedYear {
    pub fn new(year: impl Into<String>) -> Self {
        let year = year.into();
        match year.trim() {
            "" => Self::default(),
            trimmed => Self(trimmed.to_string()),
        }
    }
}

impl Default for PublishedYear {
    fn default() -> Self {
        Self(UNKNOWN_YEAR.to_string())
    }
}
