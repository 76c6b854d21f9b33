use anyhow::Context as _;

/// Add context to parse errors
pub fn parse_context(file_name: &str) -> String {
    format!("Failed to parse file: {}", file_name)
}

/// Add context to storage errors
pub fn storage_context(operation: &str, table: &str) -> String {
    format!("Failed to {} {}", operation, table)
}

/// Wrap result with storage context
pub fn with_storage_context<T, E>(result: Result<T, E>, operation: &str, table: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(storage_context(operation, table))
}
