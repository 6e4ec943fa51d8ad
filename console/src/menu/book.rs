use std::io::{BufRead, Write};

use application::service::{
    EditBookService, GetBookService, RegisterBookService, RemoveBookService,
};
use application::transfer::GetBookDto;
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::menu::Menu;
use crate::request::{
    BookTransformer, EditBookRequest, RegisterBookRequest, RemoveBookRequest, Selection,
};
use crate::response::BookPresenter;

impl<R: BufRead, W: Write> Menu<R, W> {
    pub(super) fn register_book(&mut self) -> error_stack::Result<(), KernelError> {
        let Some(title) = self.terminal.prompt("Title")? else {
            return Ok(());
        };
        let Some(author) = self.terminal.prompt("Author (blank if unknown)")? else {
            return Ok(());
        };
        let Some(published_year) = self.terminal.prompt("Year published (blank if unknown)")?
        else {
            return Ok(());
        };

        let message = Controller::new(BookTransformer, BookPresenter)
            .intake(RegisterBookRequest::new(title, author, published_year))
            .handle(|dto| self.handler().register_book(dto))?;
        self.terminal.say(message)
    }

    /// Prints the catalog and hands back the numbering for a follow-up pick.
    pub(super) fn list_books(&mut self) -> error_stack::Result<Selection, KernelError> {
        let listing = Controller::new((), BookPresenter).bypass(|| self.handler().list_books())?;
        let (lines, selection) = listing.into_parts();
        self.terminal.say_all(&lines)?;
        Ok(selection)
    }

    pub(super) fn edit_book(&mut self) -> error_stack::Result<(), KernelError> {
        let selection = self.list_books()?;
        if selection.is_empty() {
            return Ok(());
        }
        let Some(answer) = self.terminal.prompt("Book number")? else {
            return Ok(());
        };
        let id = selection.pick(&answer)?;
        let current = self
            .handler()
            .get_book(GetBookDto { id })?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        self.terminal.say("Leave blank to keep the current value.")?;
        let Some(title) = self.terminal.prompt(&format!("Title [{}]", current.title))? else {
            return Ok(());
        };
        let Some(author) = self.terminal.prompt(&format!("Author [{}]", current.author))? else {
            return Ok(());
        };
        let Some(published_year) = self
            .terminal
            .prompt(&format!("Year published [{}]", current.published_year))?
        else {
            return Ok(());
        };

        Controller::new(BookTransformer, BookPresenter)
            .intake(EditBookRequest::new(id, title, author, published_year))
            .handle(|dto| self.handler().edit_book(dto))?;
        self.terminal.say("Book updated.")
    }

    pub(super) fn remove_book(&mut self) -> error_stack::Result<(), KernelError> {
        let selection = self.list_books()?;
        if selection.is_empty() {
            return Ok(());
        }
        let Some(answer) = self.terminal.prompt("Book number")? else {
            return Ok(());
        };

        Controller::new(BookTransformer, BookPresenter)
            .try_intake(RemoveBookRequest::new(selection, answer))?
            .handle(|dto| self.handler().remove_book(dto))?;
        self.terminal.say("Book removed.")
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::menu::test::session;

    #[test]
    fn register_list_edit_and_remove() -> error_stack::Result<(), KernelError> {
        let output = session(concat!(
            "1\nDune\nHerbert\n1965\n\n",
            "1\nBeowulf\n\n\n\n",
            "2\n\n",
            "3\n2\n\nAnonymous\n\n\n",
            "2\n\n",
            "4\n1\n\n",
            "2\n\n",
            "0\n",
        ))?;

        assert!(output.contains("1. Dune by Herbert (1965) [available]"));
        assert!(output.contains("2. Beowulf by Unknown (N/A) [available]"));
        assert!(output.contains("Title [Beowulf]: "));
        assert!(output.contains("2. Beowulf by Anonymous (N/A) [available]"));
        assert!(output.contains("Book removed."));
        assert!(output.contains("1. Beowulf by Anonymous (N/A) [available]"));
        Ok(())
    }

    #[test]
    fn bad_ordinals_are_rejected() -> error_stack::Result<(), KernelError> {
        let output = session(concat!(
            "1\nDune\n\n\n\n",
            "4\nfirst\n\n",
            "4\n3\n\n",
            "2\n\n",
            "0\n",
        ))?;
        assert!(output.contains("Invalid input."));
        assert!(output.contains("No such entry."));
        assert!(output.contains("1. Dune by Unknown (N/A) [available]"));
        Ok(())
    }
}
