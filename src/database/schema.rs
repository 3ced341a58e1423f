//! Fixed SQL for the record store.
//!
//! Every statement is a compile-time literal selected by matching on
//! [`Collection`](crate::models::Collection); no query text is ever built
//! at runtime. The DDL runs on every connect and is idempotent
//! (`CREATE TABLE IF NOT EXISTS`).
//!
//! All data columns are `TEXT`: values enter through form input and are
//! stored verbatim, uncoerced, including quantity and price. The `id`
//! column is the surrogate id; `AUTOINCREMENT` keeps ids strictly
//! increasing and never reused.

pub const CREATE_TABLES: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id TEXT,
        name TEXT,
        surname TEXT,
        email TEXT,
        phone TEXT,
        street TEXT,
        house_number TEXT,
        postcode TEXT,
        county TEXT,
        city TEXT
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id TEXT,
        product_id TEXT,
        customer_id TEXT,
        quantity TEXT,
        price TEXT,
        number_order TEXT,
        timeslot TEXT
    )",
    "CREATE TABLE IF NOT EXISTS stock (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id TEXT,
        name TEXT,
        quantity TEXT,
        date TEXT,
        price TEXT,
        product_level TEXT
    )",
    "CREATE TABLE IF NOT EXISTS suppliers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        supplier_id TEXT,
        product_id TEXT,
        name TEXT,
        quantity TEXT,
        street TEXT,
        house_number TEXT,
        email TEXT,
        postcode TEXT
    )",
];

pub const INSERT_CUSTOMER: &str = "INSERT INTO customers \
    (customer_id, name, surname, email, phone, street, house_number, postcode, county, city) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

pub const INSERT_ORDER: &str = "INSERT INTO orders \
    (order_id, product_id, customer_id, quantity, price, number_order, timeslot) \
    VALUES (?, ?, ?, ?, ?, ?, ?)";

pub const INSERT_STOCK: &str = "INSERT INTO stock \
    (product_id, name, quantity, date, price, product_level) \
    VALUES (?, ?, ?, ?, ?, ?)";

pub const INSERT_SUPPLIER: &str = "INSERT INTO suppliers \
    (supplier_id, product_id, name, quantity, street, house_number, email, postcode) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

pub const SELECT_CUSTOMERS: &str = "SELECT id, customer_id, name, surname, email, phone, \
    street, house_number, postcode, county, city FROM customers ORDER BY id";

pub const SELECT_ORDERS: &str = "SELECT id, order_id, product_id, customer_id, quantity, \
    price, number_order, timeslot FROM orders ORDER BY id";

pub const SELECT_STOCK: &str = "SELECT id, product_id, name, quantity, date, price, \
    product_level FROM stock ORDER BY id";

pub const SELECT_SUPPLIERS: &str = "SELECT id, supplier_id, product_id, name, quantity, \
    street, house_number, email, postcode FROM suppliers ORDER BY id";
