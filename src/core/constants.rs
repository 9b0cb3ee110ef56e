//! Well-known settings key names shared with the application shell.
//!
//! The store does not enforce these; they document the keys the UI reads and
//! writes so call sites stay consistent.

/// Currently selected completion API.
pub const KEY_CURRENT_API: &str = "currentApi";

/// Sampling temperature for completions.
pub const KEY_TEMPERATURE: &str = "temperature";

/// UI theme name.
pub const KEY_THEME: &str = "theme";

/// Serialized list of context files attached to the conversation.
pub const KEY_CONTEXT_FILES: &str = "contextFiles";

/// Whether the API picker sorts entries by price.
pub const KEY_SORT_APIS: &str = "sortApis";

/// Whether the API picker groups entries by provider.
pub const KEY_GROUP_APIS: &str = "groupApis";

/// Path to the embedder executable.
pub const KEY_EMBEDDER_PATH: &str = "embedderPath";

/// Path to the embedder settings file.
pub const KEY_EMBEDDER_SETTINGS: &str = "embedderSettings";
