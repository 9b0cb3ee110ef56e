pub mod constants;
pub mod picker;
pub mod store;
