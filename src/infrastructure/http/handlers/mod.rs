//! HTTP Handlers

mod pet;
mod ping;

pub use pet::*;
pub use ping::*;
