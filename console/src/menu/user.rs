use std::io::{BufRead, Write};

use application::service::{GetUserService, RegisterUserService};
use kernel::KernelError;

use crate::controller::Controller;
use crate::menu::Menu;
use crate::request::{RegisterUserRequest, Selection, UserTransformer};
use crate::response::UserPresenter;

impl<R: BufRead, W: Write> Menu<R, W> {
    pub(super) fn register_user(&mut self) -> error_stack::Result<(), KernelError> {
        let Some(name) = self.terminal.prompt("Name")? else {
            return Ok(());
        };
        let Some(registration_id) = self.terminal.prompt("Registration id")? else {
            return Ok(());
        };

        let message = Controller::new(UserTransformer, UserPresenter)
            .intake(RegisterUserRequest::new(name, registration_id))
            .handle(|dto| self.handler().register_user(dto))?;
        self.terminal.say(message)
    }

    pub(super) fn list_users(&mut self) -> error_stack::Result<Selection, KernelError> {
        let listing = Controller::new((), UserPresenter).bypass(|| self.handler().list_users())?;
        let (lines, selection) = listing.into_parts();
        self.terminal.say_all(&lines)?;
        Ok(selection)
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::menu::test::session;

    #[test]
    fn duplicate_registration_id_is_refused() -> error_stack::Result<(), KernelError> {
        let output = session(concat!(
            "5\nBea\nM002\n\n",
            "5\nCid\nM002\n\n",
            "6\n\n",
            "0\n",
        ))?;
        assert!(output.contains("User registered."));
        assert!(output.contains("That registration id is already in use."));
        assert!(output.contains("1. Bea (M002), 0 loan(s) so far"));
        assert!(!output.contains("2. Cid"));
        Ok(())
    }
}
