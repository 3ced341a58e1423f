//! Pure screen controller.
//!
//! The controller is a state machine over the named screens. It owns no
//! widgets and performs no IO: [`advance`] maps the active screen and an
//! input [`Action`] to a [`Transition`] describing the next screen, the
//! storage [`Effect`] to run on the way there, and the [`Notice`] to show
//! the user. The console adapter is the only caller.

use crate::auth;
use crate::models::Collection;

/// One named, mutually exclusive presentation state.
///
/// Switching screens drops all state of the previous screen; there is no
/// screen stack.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Login,
    MainMenu,
    Form(Collection),
    Records,
}

/// The entries of the main menu, in display order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    Orders,
    Customers,
    Stock,
    Suppliers,
    Records,
    Logout,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Orders,
        MenuChoice::Customers,
        MenuChoice::Stock,
        MenuChoice::Suppliers,
        MenuChoice::Records,
        MenuChoice::Logout,
    ];
}

/// An input event handed to the controller by the rendering adapter.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    /// Login screen submission.
    Credentials { username: String, password: String },
    /// Main menu selection.
    Choice(MenuChoice),
    /// Form submission with one value per declared field, in order.
    Submit(Vec<String>),
    /// Return to the main menu without saving.
    Back,
}

/// A storage request the adapter runs while applying a transition.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Effect {
    Append(Collection, Vec<String>),
    LoadRecords,
}

/// A notification the adapter shows while applying a transition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Notice {
    Welcome,
    InvalidCredentials,
    Saved(Collection),
}

/// Result of one controller step.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Transition {
    pub screen: Screen,
    pub effect: Option<Effect>,
    pub notice: Option<Notice>,
}

impl Transition {
    fn to(screen: Screen) -> Transition {
        Transition {
            screen,
            effect: None,
            notice: None,
        }
    }
}

/// Advance the state machine by one input event.
///
/// An action that does not belong to the active screen leaves the screen
/// unchanged and raises nothing.
pub fn advance(screen: Screen, action: Action) -> Transition {
    match (screen, action) {
        (Screen::Login, Action::Credentials { username, password }) => {
            if auth::verify(&username, &password) {
                Transition {
                    screen: Screen::MainMenu,
                    effect: None,
                    notice: Some(Notice::Welcome),
                }
            } else {
                Transition {
                    screen: Screen::Login,
                    effect: None,
                    notice: Some(Notice::InvalidCredentials),
                }
            }
        }
        (Screen::MainMenu, Action::Choice(choice)) => match choice {
            MenuChoice::Orders => Transition::to(Screen::Form(Collection::Orders)),
            MenuChoice::Customers => Transition::to(Screen::Form(Collection::Customers)),
            MenuChoice::Stock => Transition::to(Screen::Form(Collection::Stock)),
            MenuChoice::Suppliers => Transition::to(Screen::Form(Collection::Suppliers)),
            MenuChoice::Records => Transition {
                screen: Screen::Records,
                effect: Some(Effect::LoadRecords),
                notice: None,
            },
            MenuChoice::Logout => Transition::to(Screen::Login),
        },
        (Screen::Form(collection), Action::Submit(values)) => Transition {
            screen: Screen::MainMenu,
            effect: Some(Effect::Append(collection, values)),
            notice: Some(Notice::Saved(collection)),
        },
        (Screen::Form(_), Action::Back) => Transition::to(Screen::MainMenu),
        (Screen::Records, Action::Back) => Transition::to(Screen::MainMenu),
        (screen, _) => Transition::to(screen),
    }
}
