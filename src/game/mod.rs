//! Game session: the shared secret and the three lanes playing against it

mod lane;
mod secret;
mod session;

pub use lane::{Lane, LaneKind};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use session::{GameSession, GameStatus, RoundReport};
