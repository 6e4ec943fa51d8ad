use vodca::{AsRefln, Fromln};

pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    /// Blank input falls back to [`UNKNOWN_AUTHOR`].
    pub fn new(author: impl Into<String>) -> Self {
        let author = author.into();
        match author.trim() {
            "" => Self::default(),
            trimmed => Self(trimmed.to_string()),
        }
    }
}

impl Default for BookAuthor {
    fn default() -> Self {
        Self(UNKNOWN_AUTHOR.to_string())
    }
}
