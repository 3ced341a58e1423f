use crate::console::prompt;
use crate::error::ServiceResult;
use crate::models::Collection;
use crate::screen::Action;

fn title(collection: Collection) -> &'static str {
    match collection {
        Collection::Customers => "Customer Information",
        Collection::Orders => "Online Orders",
        Collection::Stock => "Stock Levels",
        Collection::Suppliers => "Supplier Information",
    }
}

fn submit_label(collection: Collection) -> &'static str {
    match collection {
        Collection::Customers => "Add Customer",
        Collection::Orders => "Add Order",
        Collection::Stock => "Add Stock",
        Collection::Suppliers => "Add Supplier",
    }
}

/// Prompt for every declared field of the collection in order, then for
/// the submit or back choice.
///
/// Field values are taken verbatim; empty input is a valid value.
pub fn collect(collection: Collection) -> ServiceResult<Option<Action>> {
    prompt::header(title(collection));

    let mut entries = Vec::with_capacity(collection.fields().len());
    for field in collection.fields() {
        let Some(value) = prompt::read_value(&format!("{}: ", field.label))? else {
            return Ok(None);
        };
        entries.push(value);
    }

    println!("1) {}", submit_label(collection));
    println!("2) Back");

    loop {
        let Some(input) = prompt::read_value("Choice: ")? else {
            return Ok(None);
        };

        match input.as_str() {
            "1" => return Ok(Some(Action::Submit(entries))),
            "2" => return Ok(Some(Action::Back)),
            _ => println!("Unknown choice: {input:?}"),
        }
    }
}
