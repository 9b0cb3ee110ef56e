pub mod escape;
pub mod format;
pub mod logging;
pub mod url;
