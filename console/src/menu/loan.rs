use std::io::{BufRead, Write};

use application::service::{
    CreateLoanService, GetBookService, GetLoanService, ReturnLoanService,
};
use kernel::KernelError;

use crate::controller::Controller;
use crate::menu::Menu;
use crate::request::{
    CreateLoanRequest, LoanTransformer, ReturnLoanRequest, Selection, UserLoansRequest,
    UserTransformer,
};
use crate::response::{AvailableBooks, BookPresenter, LoanPresenter};

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Lists users and resolves the operator's pick.
    fn choose_user(&mut self) -> error_stack::Result<Option<(Selection, String)>, KernelError> {
        let selection = self.list_users()?;
        if selection.is_empty() {
            return Ok(None);
        }
        Ok(self
            .terminal
            .prompt("User number")?
            .map(|answer| (selection, answer)))
    }

    pub(super) fn create_loan(&mut self) -> error_stack::Result<(), KernelError> {
        let Some((selection, answer)) = self.choose_user()? else {
            return Ok(());
        };
        let user_id = selection.pick(&answer)?;

        let listing = Controller::new((), BookPresenter).bypass(|| {
            self.handler().list_books().map(|books| {
                AvailableBooks(books.into_iter().filter(|book| book.available).collect())
            })
        })?;
        let (lines, selection) = listing.into_parts();
        self.terminal.say_all(&lines)?;
        if selection.is_empty() {
            return Ok(());
        }
        let Some(answer) = self.terminal.prompt("Book number")? else {
            return Ok(());
        };
        let book_id = selection.pick(&answer)?;

        let duration = *self.handler().loan_duration();
        let message = Controller::new(LoanTransformer, LoanPresenter)
            .intake(CreateLoanRequest::new(user_id, book_id, duration))
            .handle(|dto| self.handler().create_loan(dto))?;
        self.terminal.say(message)
    }

    pub(super) fn return_loan(&mut self) -> error_stack::Result<(), KernelError> {
        let Some((selection, answer)) = self.choose_user()? else {
            return Ok(());
        };
        let listing = Controller::new(UserTransformer, LoanPresenter)
            .try_intake(UserLoansRequest::new(selection, answer))?
            .handle(|dto| self.handler().active_loans_of(dto))?;
        let (lines, selection) = listing.into_parts();
        self.terminal.say_all(&lines)?;
        if selection.is_empty() {
            return Ok(());
        }
        let Some(answer) = self.terminal.prompt("Loan number")? else {
            return Ok(());
        };

        let message = Controller::new(LoanTransformer, LoanPresenter)
            .try_intake(ReturnLoanRequest::new(selection, answer))?
            .handle(|dto| self.handler().return_loan(dto))?;
        self.terminal.say(message)
    }

    pub(super) fn loan_history(&mut self) -> error_stack::Result<(), KernelError> {
        let Some((selection, answer)) = self.choose_user()? else {
            return Ok(());
        };
        let listing = Controller::new(UserTransformer, LoanPresenter)
            .try_intake(UserLoansRequest::new(selection, answer))?
            .handle(|dto| self.handler().history_of(dto))?;
        let (lines, _) = listing.into_parts();
        self.terminal.say_all(&lines)
    }
}
