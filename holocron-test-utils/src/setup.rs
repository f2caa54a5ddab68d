/// Connects to an empty in-memory database, without any tables.
///
/// Useful for asserting that database failures surface as errors.
#[macro_export]
macro_rules! test_setup {
    () => {{
        $crate::TestBuilder::new().build().await
    }};
}

/// Connects to an in-memory database with all migrations applied.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().with_tables().build().await
    }};
}
