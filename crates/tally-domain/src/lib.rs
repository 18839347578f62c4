//! tally-domain
//!
//! Pure domain models (LedgerState, Item, Theme, snapshots, stored records).
//! No I/O, no storage. Only data types and core enums.

pub mod common;
pub mod currency;
pub mod item;
pub mod snapshot;
pub mod state;
pub mod stored;
pub mod theme;

pub use common::*;
pub use currency::*;
pub use item::*;
pub use snapshot::*;
pub use state::*;
pub use stored::*;
pub use theme::*;
