//! Console rendering adapter.
//!
//! Translates the active screen into terminal prompts and controller
//! transitions into terminal output. All IO of the application happens
//! here; the controller stays pure and owns no widgets.

mod form;
mod login;
mod menu;
mod prompt;
mod records;

use log::{error, warn};

use crate::database::Database;
use crate::error::ServiceResult;
use crate::models::Collection;
use crate::screen::{self, Action, Effect, Notice, Screen, Transition};

/// Drive the screen loop until end of input.
///
/// Reaching end of input is the console analog of closing the window and
/// exits cleanly from any screen.
pub async fn run(db: &Database) -> ServiceResult<()> {
    let mut current = Screen::Login;

    loop {
        let Some(action) = collect(current)? else {
            return Ok(());
        };

        let attempted = match &action {
            Action::Credentials { username, .. } => Some(username.clone()),
            _ => None,
        };

        let transition = screen::advance(current, action);
        if transition.notice == Some(Notice::InvalidCredentials) {
            if let Some(username) = attempted {
                warn!("rejected login for username {username:?}");
            }
        }

        current = apply(db, current, transition).await?;
    }
}

fn collect(screen: Screen) -> ServiceResult<Option<Action>> {
    match screen {
        Screen::Login => login::collect(),
        Screen::MainMenu => menu::collect(),
        Screen::Form(collection) => form::collect(collection),
        Screen::Records => records::collect(),
    }
}

/// Apply one transition: run its storage effect, show its notice and
/// return the next active screen.
///
/// A failed effect is surfaced as a blocking error and keeps the current
/// screen active; the notice of the transition is dropped with it.
async fn apply(db: &Database, current: Screen, transition: Transition) -> ServiceResult<Screen> {
    if let Some(effect) = transition.effect {
        if let Err(error) = run_effect(db, effect).await {
            error!("{error}");
            println!("Error: {error}");
            return Ok(current);
        }
    }

    if let Some(notice) = transition.notice {
        notify(notice);
    }

    Ok(transition.screen)
}

async fn run_effect(db: &Database, effect: Effect) -> ServiceResult<()> {
    match effect {
        Effect::Append(collection, values) => {
            db.append(collection, &values).await?;
            Ok(())
        }
        Effect::LoadRecords => records::render(db).await,
    }
}

fn notify(notice: Notice) {
    match notice {
        Notice::Welcome => println!("Login Successful: Welcome!"),
        Notice::InvalidCredentials => println!("Login Failed: Invalid username or password"),
        Notice::Saved(collection) => println!("Success: {}", saved_message(collection)),
    }
}

fn saved_message(collection: Collection) -> &'static str {
    match collection {
        Collection::Customers => "Customer added successfully!",
        Collection::Orders => "Order added successfully!",
        Collection::Stock => "Stock record added successfully!",
        Collection::Suppliers => "Supplier added successfully!",
    }
}
