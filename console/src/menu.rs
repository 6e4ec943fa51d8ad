use std::io::{BufRead, Write};

use kernel::KernelError;

use crate::error::ErrorMessage;
use crate::handler::{AppModule, Handler};
use crate::terminal::Terminal;

mod book;
mod loan;
mod user;

const OPTIONS: [&str; 12] = [
    "",
    "===== Library =====",
    "1. Register book",
    "2. List books",
    "3. Edit book",
    "4. Remove book",
    "5. Register user",
    "6. List users",
    "7. Lend book",
    "8. Return book",
    "9. User loan history",
    "0. Exit",
];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum MenuOption {
    RegisterBook,
    ListBooks,
    EditBook,
    RemoveBook,
    RegisterUser,
    ListUsers,
    CreateLoan,
    ReturnLoan,
    LoanHistory,
    Exit,
}

impl MenuOption {
    fn parse(answer: &str) -> Option<Self> {
        let option = match answer.trim() {
            "1" => Self::RegisterBook,
            "2" => Self::ListBooks,
            "3" => Self::EditBook,
            "4" => Self::RemoveBook,
            "5" => Self::RegisterUser,
            "6" => Self::ListUsers,
            "7" => Self::CreateLoan,
            "8" => Self::ReturnLoan,
            "9" => Self::LoanHistory,
            "0" => Self::Exit,
            _ => return None,
        };
        Some(option)
    }
}

pub struct Menu<R, W> {
    module: AppModule,
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(module: AppModule, terminal: Terminal<R, W>) -> Self {
        Self { module, terminal }
    }

    fn handler(&self) -> &Handler {
        &self.module
    }

    /// Runs until the operator picks exit or input ends. Only integrity
    /// failures and broken terminals end it early.
    pub fn run(&mut self) -> error_stack::Result<(), KernelError> {
        loop {
            for line in OPTIONS {
                self.terminal.say(line)?;
            }
            let Some(answer) = self.terminal.prompt("Choose an option")? else {
                break;
            };
            match MenuOption::parse(&answer) {
                None => self.terminal.say("Invalid option.")?,
                Some(MenuOption::Exit) => break,
                Some(option) => {
                    tracing::debug!(?option, "menu action");
                    if let Err(report) = self.dispatch(option) {
                        let message = ErrorMessage::from(report);
                        if message.is_fatal() {
                            return Err(message.into_report());
                        }
                        tracing::warn!(?option, "{:?}", message);
                        self.terminal.say(&message)?;
                    }
                }
            }

            if self.terminal.is_closed() {
                break;
            }
            self.terminal.pause()?;
            if self.terminal.is_closed() {
                break;
            }
        }
        self.terminal.say("Bye.")?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> error_stack::Result<(), KernelError> {
        match option {
            MenuOption::RegisterBook => self.register_book(),
            MenuOption::ListBooks => self.list_books().map(|_| ()),
            MenuOption::EditBook => self.edit_book(),
            MenuOption::RemoveBook => self.remove_book(),
            MenuOption::RegisterUser => self.register_user(),
            MenuOption::ListUsers => self.list_users().map(|_| ()),
            MenuOption::CreateLoan => self.create_loan(),
            MenuOption::ReturnLoan => self.return_loan(),
            MenuOption::LoanHistory => self.loan_history(),
            MenuOption::Exit => Ok(()),
        }
    }

    #[cfg(test)]
    fn into_terminal(self) -> Terminal<R, W> {
        self.terminal
    }
}
