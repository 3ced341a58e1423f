mod auth;
mod console;
mod database;
mod env;
mod error;
mod models;
mod screen;

use crate::database::Database;
use crate::error::ServiceResult;

#[tokio::main]
async fn main() {
    let result = init().await;

    let exit_code = match result {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn init() -> ServiceResult<()> {
    dotenv::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Open the record store before the first screen and close it on the
    // way out, whatever the screen loop returned.
    let db = Database::connect(env::DATABASE_URL.as_str()).await?;
    let result = console::run(&db).await;
    db.close().await;

    result
}
