use application::transfer::BookDto;
use uuid::Uuid;

use crate::controller::Exhaust;
use crate::response::Listing;

/// Books that can be lent right now.
pub struct AvailableBooks(pub Vec<BookDto>);

fn render(book: &BookDto) -> String {
    let status = if book.available { "available" } else { "on loan" };
    format!(
        "{} by {} ({}) [{status}]",
        book.title, book.author, book.published_year
    )
}

pub struct BookPresenter;

impl Exhaust<()> for BookPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}

impl Exhaust<Uuid> for BookPresenter {
    type To = String;
    fn emit(&self, _: Uuid) -> Self::To {
        "Book registered.".to_string()
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Listing;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        Listing::numbered(input, "No books registered.", |book| book.id, render)
    }
}

impl Exhaust<AvailableBooks> for BookPresenter {
    type To = Listing;
    fn emit(&self, input: AvailableBooks) -> Self::To {
        Listing::numbered(input.0, "No books available.", |book| book.id, render)
    }
}
