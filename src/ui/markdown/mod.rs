mod code;
mod links;
mod render;

#[cfg(test)]
mod tests;

pub use code::BlockIdSource;
pub use render::{MarkdownRenderer, UrlRewriter};
