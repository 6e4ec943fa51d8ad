use time::OffsetDateTime;
use uuid::Uuid;

use crate::request::Selection;

pub use self::{book::*, loan::*, user::*};

mod book;
mod loan;
mod user;

/// Rendered lines of a numbered list together with the ids behind each number.
#[derive(Debug)]
pub struct Listing {
    lines: Vec<String>,
    selection: Selection,
}

impl Listing {
    fn numbered<T>(
        entries: Vec<T>,
        empty: &str,
        id: impl Fn(&T) -> Uuid,
        render: impl Fn(&T) -> String,
    ) -> Self {
        if entries.is_empty() {
            return Self {
                lines: vec![empty.to_string()],
                selection: Selection::default(),
            };
        }
        let lines = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("{}. {}", index + 1, render(entry)))
            .collect();
        let selection = Selection::new(entries.iter().map(id).collect());
        Self { lines, selection }
    }

    pub fn into_parts(self) -> (Vec<String>, Selection) {
        (self.lines, self.selection)
    }
}

/// dd/mm/yyyy
fn format_date(at: &OffsetDateTime) -> String {
    format!("{:02}/{:02}/{}", at.day(), u8::from(at.month()), at.year())
}
