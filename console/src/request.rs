pub use self::{book::*, loan::*, selection::*, user::*};

mod book;
mod loan;
mod selection;
mod user;

/// Blank answers mean "not given".
fn given(answer: String) -> Option<String> {
    if answer.trim().is_empty() {
        None
    } else {
        Some(answer)
    }
}
