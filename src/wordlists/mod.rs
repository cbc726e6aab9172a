//! Word lists for the game
//!
//! Loading, the allowed-guess membership check, and the answer list.

mod allowed;
mod dictionary;
pub mod loader;

pub use allowed::AllowedSet;
pub use dictionary::Dictionary;
