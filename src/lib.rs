//! Causerie is the client core for a local-first RAG chat assistant.
//!
//! The crate is organized around three independent pieces:
//! - [`ui::markdown`] converts chat Markdown into the sanitized, interactive
//!   HTML the chat surface injects directly, including download-link
//!   rewriting and copy-to-clipboard code blocks.
//! - [`core::store`] keeps user-visible settings consistent between a
//!   synchronous local cache and an asynchronous persistence authority that
//!   may be slow, absent, or diverged.
//! - [`core::picker`] arranges priced API/model entries for the picker UI.
//!
//! Everything else (chat transport, window plumbing, theming) lives in the
//! surrounding application and talks to this crate through the types above.

pub mod core;
pub mod ui;
pub mod utils;
