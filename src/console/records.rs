use crate::console::prompt;
use crate::database::Database;
use crate::error::ServiceResult;
use crate::models::Collection;
use crate::screen::Action;

/// Dump all four collections as a labeled read-only listing, in the
/// fixed order customers, orders, stock, suppliers.
///
/// The listing prints only once every fetch succeeded; a failing fetch
/// leaves no partial output behind.
pub async fn render(db: &Database) -> ServiceResult<()> {
    let text = dump(db).await?;

    prompt::header("View Records");
    print!("{text}");

    Ok(())
}

async fn dump(db: &Database) -> ServiceResult<String> {
    let mut text = String::new();

    for collection in Collection::ALL {
        let rows = db.fetch_all(collection).await?;

        text.push_str(&format!("--- {} ---\n", collection.name().to_uppercase()));
        for row in rows {
            text.push_str(&format!("{row}\n"));
        }
        text.push('\n');
    }

    Ok(text)
}

pub fn collect() -> ServiceResult<Option<Action>> {
    let input = prompt::read_value("Press Enter to go back: ")?;

    match input {
        Some(_) => Ok(Some(Action::Back)),
        None => Ok(None),
    }
}
