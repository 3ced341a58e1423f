lazy_static::lazy_static! {
    /// Location of the record store. Defaults to the `system.db` file in
    /// the working directory; the file is created on first start.
    ///
    /// Field name: `DATABASE_URL`
    pub static ref DATABASE_URL: String = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:system.db".to_owned());
}
