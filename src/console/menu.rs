use crate::console::prompt;
use crate::error::ServiceResult;
use crate::screen::{Action, MenuChoice};

fn label(choice: MenuChoice) -> &'static str {
    match choice {
        MenuChoice::Orders => "Online Orders",
        MenuChoice::Customers => "Customer Information",
        MenuChoice::Stock => "Stock Levels",
        MenuChoice::Suppliers => "Supplier Information",
        MenuChoice::Records => "View Database Records",
        MenuChoice::Logout => "Logout",
    }
}

fn select(input: &str) -> Option<MenuChoice> {
    // The menu advertises plain digits; no signs, no surrounding space.
    if !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    input
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| MenuChoice::ALL.get(index).copied())
}

/// Show the main menu and prompt until a valid entry is chosen.
pub fn collect() -> ServiceResult<Option<Action>> {
    prompt::header("Main Menu");
    for (index, choice) in MenuChoice::ALL.iter().enumerate() {
        println!("{}) {}", index + 1, label(*choice));
    }

    loop {
        let Some(input) = prompt::read_value("Choice: ")? else {
            return Ok(None);
        };

        match select(&input) {
            Some(choice) => return Ok(Some(Action::Choice(choice))),
            None => println!("Unknown choice: {input:?}"),
        }
    }
}
