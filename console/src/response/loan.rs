use application::transfer::LoanDto;

use crate::controller::Exhaust;
use crate::response::{format_date, Listing};

const REMOVED_BOOK: &str = "(removed book)";

fn title(loan: &LoanDto) -> &str {
    loan.book_title.as_deref().unwrap_or(REMOVED_BOOK)
}

fn render(loan: &LoanDto) -> String {
    let borrowed = format!("{}, borrowed on {}", title(loan), format_date(&loan.borrowed_at));
    match &loan.returned_at {
        Some(returned_at) => format!("{borrowed}, returned on {}", format_date(returned_at)),
        None if loan.overdue => format!(
            "{borrowed}, due by {} [OVERDUE]",
            format_date(&loan.due_at)
        ),
        None => format!("{borrowed}, due by {}", format_date(&loan.due_at)),
    }
}

pub struct LoanPresenter;

impl Exhaust<LoanDto> for LoanPresenter {
    type To = String;
    fn emit(&self, input: LoanDto) -> Self::To {
        match &input.returned_at {
            Some(returned_at) if *returned_at > input.due_at => format!(
                "Returned \"{}\" on {}, {} day(s) late.",
                title(&input),
                format_date(returned_at),
                (*returned_at - input.due_at).whole_days().max(1)
            ),
            Some(returned_at) => format!(
                "Returned \"{}\" on {}.",
                title(&input),
                format_date(returned_at)
            ),
            None => format!(
                "Lent \"{}\" until {}.",
                title(&input),
                format_date(&input.due_at)
            ),
        }
    }
}

impl Exhaust<Vec<LoanDto>> for LoanPresenter {
    type To = Listing;
    fn emit(&self, input: Vec<LoanDto>) -> Self::To {
        Listing::numbered(input, "No loans.", |loan| loan.id, render)
    }
}
