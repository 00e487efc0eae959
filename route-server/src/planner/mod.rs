//! Route planner.
//!
//! Three independent strategies answer "how do I get from A to B?" over a
//! [`Network`](crate::network::Network):
//!
//! - [`MinDistance`]: shortest total length, label-setting search.
//! - [`MinTime`]: quickest route with free transfers, breadth-first path
//!   enumeration.
//! - [`MinTransfers`]: fewest line changes, the same enumeration with a
//!   transfer-aware cost.
//!
//! They share the [`RouteSearch`] interface and the [`PathResult`] shape,
//! but their cost rules differ on purpose and are kept separate.

mod config;
mod distance;
mod mode;
mod result;
mod search;
mod state;
mod time;
mod transfers;

pub use config::RouteConfig;
pub use distance::MinDistance;
pub use mode::{SearchMode, UnknownSearchMode};
pub use result::{PathResult, Transfer, transfers_along};
pub use search::{RouteSearch, search, strategy_for};
pub use time::MinTime;
pub use transfers::MinTransfers;
