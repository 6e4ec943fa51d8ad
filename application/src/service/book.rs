use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookAuthor, BookId, BookTitle, IsAvailable, PublishedYear,
};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

pub trait GetBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id)?;

        Ok(book.map(BookDto::from))
    }

    fn list_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let books = self.book_query().find_all(&mut connection)?;
        tracing::debug!(count = books.len(), "listed books");

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: Transaction, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

pub trait RegisterBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    fn register_book(&self, dto: CreateBookDto) -> error_stack::Result<Uuid, KernelError> {
        let title = BookTitle::new(dto.title)?;
        let author = dto.author.map(BookAuthor::new).unwrap_or_default();
        let published_year = dto
            .published_year
            .map(PublishedYear::new)
            .unwrap_or_default();

        let mut connection = self.database_connection().transact()?;

        let uuid = Uuid::new_v4();
        let book = Book::new(
            BookId::new(uuid),
            title,
            author,
            published_year,
            IsAvailable::new(true),
        );
        self.book_modifier().create(&mut connection, &book)?;
        connection.commit()?;

        tracing::info!(book.id = %uuid, book.title = %book.title().as_ref(), "registered book");
        Ok(uuid)
    }
}

impl<Connection: Transaction, T> RegisterBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

pub trait EditBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    /// Availability is not editable here; only lending and returning move it.
    fn edit_book(&self, dto: UpdateBookDto) -> error_stack::Result<(), KernelError> {
        let title = dto.title.map(BookTitle::new).transpose()?;
        let author = dto.author.map(BookAuthor::new);
        let published_year = dto.published_year.map(PublishedYear::new);

        let mut connection = self.database_connection().transact()?;

        let id = BookId::new(dto.id);
        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("book {}", dto.id))
            })?;

        book.substitute(|book| {
            if let Some(title) = title {
                *book.title = title;
            }
            if let Some(author) = author {
                *book.author = author;
            }
            if let Some(published_year) = published_year {
                *book.published_year = published_year;
            }
        });
        self.book_modifier().update(&mut connection, &book)?;
        connection.commit()?;

        tracing::info!(book.id = %dto.id, "edited book");
        Ok(())
    }
}

impl<Connection: Transaction, T> EditBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

pub trait RemoveBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    fn remove_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("book {}", dto.id))
            })?;

        if !book.is_available() {
            tracing::warn!(book.id = %dto.id, "refused to remove a book on loan");
            return Err(Report::new(KernelError::BookUnavailable)
                .attach_printable(format!("book {} has an open loan", dto.id)));
        }

        self.book_modifier().delete(&mut connection, &id)?;
        connection.commit()?;

        tracing::info!(book.id = %dto.id, "removed book");
        Ok(())
    }
}

impl<Connection: Transaction, T> RemoveBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::service::{EditBookService, GetBookService, RegisterBookService, RemoveBookService};
    use crate::testing::TestModule;
    use crate::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

    fn dune() -> CreateBookDto {
        CreateBookDto {
            title: "Dune".to_string(),
            author: Some("Herbert".to_string()),
            published_year: Some("1965".to_string()),
        }
    }

    #[test]
    fn registered_book_is_listed_as_available() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let id = module.register_book(dune())?;

        let books = module.list_books()?;
        assert_eq!(books.len(), 1);
        let book = &books[0];
        assert_eq!(book.id, id);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.published_year, "1965");
        assert!(book.available);
        Ok(())
    }

    #[test]
    fn omitted_author_and_year_use_placeholders() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let id = module.register_book(CreateBookDto {
            title: "Beowulf".to_string(),
            author: None,
            published_year: Some("  ".to_string()),
        })?;

        let book = module.get_book(GetBookDto { id })?.expect("registered");
        assert_eq!(book.author, "Unknown");
        assert_eq!(book.published_year, "N/A");
        Ok(())
    }

    #[test]
    fn empty_title_is_rejected_without_side_effects() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let error = module
            .register_book(CreateBookDto {
                title: " ".to_string(),
                author: None,
                published_year: None,
            })
            .expect_err("blank title");
        assert_eq!(error.current_context(), &KernelError::InvalidInput);
        assert!(module.list_books()?.is_empty());
        Ok(())
    }

    #[test]
    fn list_keeps_registration_order() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        for title in ["Dune", "Emma", "Ulysses"] {
            module.register_book(CreateBookDto {
                title: title.to_string(),
                author: None,
                published_year: None,
            })?;
        }
        let titles = module
            .list_books()?
            .into_iter()
            .map(|book| book.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Dune", "Emma", "Ulysses"]);
        Ok(())
    }

    #[test]
    fn edit_changes_only_given_fields() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let id = module.register_book(dune())?;

        module.edit_book(UpdateBookDto {
            id,
            title: Some("Dune Messiah".to_string()),
            author: None,
            published_year: None,
        })?;

        let book = module.get_book(GetBookDto { id })?.expect("registered");
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.published_year, "1965");
        assert!(book.available);
        Ok(())
    }

    #[test]
    fn edit_rejects_unknown_id_and_blank_title() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let id = module.register_book(dune())?;

        let error = module
            .edit_book(UpdateBookDto {
                id: Uuid::new_v4(),
                title: None,
                author: Some("Nobody".to_string()),
                published_year: None,
            })
            .expect_err("unknown id");
        assert_eq!(error.current_context(), &KernelError::NotFound);

        let error = module
            .edit_book(UpdateBookDto {
                id,
                title: Some(String::new()),
                author: Some("Nobody".to_string()),
                published_year: None,
            })
            .expect_err("blank title");
        assert_eq!(error.current_context(), &KernelError::InvalidInput);

        let book = module.get_book(GetBookDto { id })?.expect("registered");
        assert_eq!(book.author, "Herbert");
        Ok(())
    }

    #[test]
    fn remove_deletes_available_book() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        let id = module.register_book(dune())?;
        module.remove_book(DeleteBookDto { id })?;

        assert!(module.get_book(GetBookDto { id })?.is_none());
        let error = module
            .remove_book(DeleteBookDto { id })
            .expect_err("already removed");
        assert_eq!(error.current_context(), &KernelError::NotFound);
        Ok(())
    }
}
