use std::fmt;

/// One of the four fixed record collections.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Collection {
    Customers,
    Orders,
    Stock,
    Suppliers,
}

/// A single input field of a collection: store column plus prompt label.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Field {
    pub column: &'static str,
    pub label: &'static str,
}

const CUSTOMER_FIELDS: &[Field] = &[
    Field { column: "customer_id", label: "CustomerID" },
    Field { column: "name", label: "Name" },
    Field { column: "surname", label: "Surname" },
    Field { column: "email", label: "Email" },
    Field { column: "phone", label: "Phone" },
    Field { column: "street", label: "Street Name" },
    Field { column: "house_number", label: "House Number" },
    Field { column: "postcode", label: "Post Code" },
    Field { column: "county", label: "County" },
    Field { column: "city", label: "City" },
];

const ORDER_FIELDS: &[Field] = &[
    Field { column: "order_id", label: "OrderID" },
    Field { column: "product_id", label: "ProductID" },
    Field { column: "customer_id", label: "CustomerID" },
    Field { column: "quantity", label: "Quantity" },
    Field { column: "price", label: "Price" },
    Field { column: "number_order", label: "NumberOrder" },
    Field { column: "timeslot", label: "Timeslot" },
];

const STOCK_FIELDS: &[Field] = &[
    Field { column: "product_id", label: "ProductID" },
    Field { column: "name", label: "Name" },
    Field { column: "quantity", label: "Quantity" },
    Field { column: "date", label: "Date" },
    Field { column: "price", label: "Price" },
    Field { column: "product_level", label: "Product Level" },
];

const SUPPLIER_FIELDS: &[Field] = &[
    Field { column: "supplier_id", label: "SupplierID" },
    Field { column: "product_id", label: "ProductID" },
    Field { column: "name", label: "Name" },
    Field { column: "quantity", label: "Quantity" },
    Field { column: "street", label: "Street Name" },
    Field { column: "house_number", label: "House Number" },
    Field { column: "email", label: "Email" },
    Field { column: "postcode", label: "Post Code" },
];

impl Collection {
    /// All collections in the fixed dump order of the records view.
    pub const ALL: [Collection; 4] = [
        Collection::Customers,
        Collection::Orders,
        Collection::Stock,
        Collection::Suppliers,
    ];

    /// Table name of the collection in the record store.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Customers => "customers",
            Collection::Orders => "orders",
            Collection::Stock => "stock",
            Collection::Suppliers => "suppliers",
        }
    }

    /// Declared fields of the collection, in column order. Every stored
    /// row carries exactly one value per field.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Collection::Customers => CUSTOMER_FIELDS,
            Collection::Orders => ORDER_FIELDS,
            Collection::Stock => STOCK_FIELDS,
            Collection::Suppliers => SUPPLIER_FIELDS,
        }
    }
}

/// One stored row: the surrogate id assigned by the store plus the
/// ordered column values, verbatim as they were entered.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Row {
    pub id: i64,
    pub values: Vec<String>,
}

/// Rows print as a tuple of their raw ordered values, id first.
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.id)?;
        for value in &self.values {
            write!(f, ", {value:?}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_field_counts() {
        assert_eq!(Collection::Customers.fields().len(), 10);
        assert_eq!(Collection::Orders.fields().len(), 7);
        assert_eq!(Collection::Stock.fields().len(), 6);
        assert_eq!(Collection::Suppliers.fields().len(), 8);
    }

    #[test]
    fn test_dump_order() {
        let names: Vec<_> = Collection::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["customers", "orders", "stock", "suppliers"]);
    }

    #[test]
    fn test_row_prints_as_tuple() {
        let row = Row {
            id: 1,
            values: vec!["C1".to_owned(), "Jane".to_owned(), "".to_owned()],
        };
        assert_eq!(row.to_string(), r#"(1, "C1", "Jane", "")"#);
    }
}
