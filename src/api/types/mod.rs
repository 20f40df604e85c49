//! Response types for the warframe.market REST API.
//!
//! Every record is decoded once from the response and then owned by the caller.

pub mod droptable;
pub mod included;
pub mod item;
pub mod order;

pub use droptable::*;
pub use included::*;
pub use item::*;
pub use order::*;
