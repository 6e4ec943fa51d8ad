use application::transfer::{CreateBookDto, DeleteBookDto, UpdateBookDto};
use kernel::KernelError;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};
use crate::request::{given, Selection};

#[derive(Debug)]
pub struct RegisterBookRequest {
    title: String,
    author: String,
    published_year: String,
}

impl RegisterBookRequest {
    pub fn new(title: String, author: String, published_year: String) -> Self {
        Self {
            title,
            author,
            published_year,
        }
    }
}

#[derive(Debug)]
pub struct EditBookRequest {
    id: Uuid,
    title: String,
    author: String,
    published_year: String,
}

impl EditBookRequest {
    pub fn new(id: Uuid, title: String, author: String, published_year: String) -> Self {
        Self {
            id,
            title,
            author,
            published_year,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookRequest {
    selection: Selection,
    answer: String,
}

impl RemoveBookRequest {
    pub fn new(selection: Selection, answer: String) -> Self {
        Self { selection, answer }
    }
}

pub struct BookTransformer;

impl Intake<RegisterBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: RegisterBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: given(input.author),
            published_year: given(input.published_year),
        }
    }
}

impl Intake<EditBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: EditBookRequest) -> Self::To {
        UpdateBookDto {
            id: input.id,
            title: given(input.title),
            author: given(input.author),
            published_year: given(input.published_year),
        }
    }
}

impl TryIntake<RemoveBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: RemoveBookRequest) -> Result<Self::To, Self::Error> {
        let id = input.selection.pick(&input.answer)?;
        Ok(DeleteBookDto { id })
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use crate::controller::Intake;
    use crate::request::{BookTransformer, EditBookRequest, RegisterBookRequest};

    #[test]
    fn blank_optional_fields_are_omitted() {
        let dto = BookTransformer.emit(RegisterBookRequest::new(
            "Dune".to_string(),
            " ".to_string(),
            String::new(),
        ));
        assert_eq!(dto.title, "Dune");
        assert_eq!(dto.author, None);
        assert_eq!(dto.published_year, None);
    }

    #[test]
    fn blank_edit_answers_keep_current_values() {
        let id = Uuid::new_v4();
        let dto = BookTransformer.emit(EditBookRequest::new(
            id,
            String::new(),
            "Frank Herbert".to_string(),
            "  ".to_string(),
        ));
        assert_eq!(dto.id, id);
        assert_eq!(dto.title, None);
        assert_eq!(dto.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(dto.published_year, None);
    }
}
