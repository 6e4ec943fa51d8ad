use application::transfer::UserDto;
use uuid::Uuid;

use crate::controller::Exhaust;
use crate::response::Listing;

pub struct UserPresenter;

impl Exhaust<Uuid> for UserPresenter {
    type To = String;
    fn emit(&self, _: Uuid) -> Self::To {
        "User registered.".to_string()
    }
}

impl Exhaust<Vec<UserDto>> for UserPresenter {
    type To = Listing;
    fn emit(&self, input: Vec<UserDto>) -> Self::To {
        Listing::numbered(
            input,
            "No users registered.",
            |user| user.id,
            |user| {
                format!(
                    "{} ({}), {} loan(s) so far",
                    user.name,
                    user.registration_id,
                    user.loans.len()
                )
            },
        )
    }
}
