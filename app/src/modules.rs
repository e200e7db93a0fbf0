//! Module query services backed by the genesis state in [`SharedState`](crate::genesis::SharedState).
//!
//! Every method a module does not answer returns `UNIMPLEMENTED`; the group
//! module has no query implementation and is served by
//! [`unimplemented::GroupQuery`](crate::unimplemented::GroupQuery).

pub mod distribution;
pub mod gov;
pub mod staking;
