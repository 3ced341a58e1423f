//! Login gate for the single staff account.
//!
//! There is no account storage behind this: the application knows exactly
//! one credential pair, compared literally.

const STAFF_USERNAME: &str = "staff1";
const STAFF_PASSWORD: &str = "1234";

/// Check a username/password pair against the staff account.
pub fn verify(username: &str, password: &str) -> bool {
    username == STAFF_USERNAME && password == STAFF_PASSWORD
}
