mod author;
mod id;
mod published_year;
mod title;

pub use self::{author::*, id::*, published_year::*, title::*};
use crate::entity::IsAvailable;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    published_year: PublishedYear,
    available: IsAvailable,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        published_year: PublishedYear,
        available: IsAvailable,
    ) -> Self {
        Self {
            id,
            title,
            author,
            published_year,
            available,
        }
    }

    pub fn is_available(&self) -> bool {
        *self.available.as_ref()
    }
}
