//! HTTP Handlers

mod docs;
mod ping;
mod user;

pub use docs::*;
pub use ping::*;
pub use user::*;
