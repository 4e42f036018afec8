pub const RESOURCE_UNAVAILABLE: &str = "RESOURCE_UNAVAILABLE";
pub const SOURCE_SYNTAX_ERROR: &str = "SOURCE_SYNTAX_ERROR";
pub const UNRESOLVED_IMPORT: &str = "UNRESOLVED_IMPORT";
pub const EMPTY_BUNDLE: &str = "EMPTY_BUNDLE";
pub const PANIC: &str = "PANIC";
