use crate::console::prompt;
use crate::error::ServiceResult;
use crate::screen::Action;

/// Prompt for the staff credentials.
pub fn collect() -> ServiceResult<Option<Action>> {
    prompt::header("Login");

    let Some(username) = prompt::read_value("Username: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt::read_secret("Password: ")? else {
        return Ok(None);
    };

    Ok(Some(Action::Credentials { username, password }))
}
