//! Serves the Cosmos SDK module services and the Tendermint ABCI application
//! interface over gRPC.
//!
//! The ABCI side wraps an [`abci::Application`] in an [`abci::AbciService`]
//! that rejects calls arriving out of order. The gRPC side serves the staking,
//! distribution and gov queries from the module genesis in
//! [`genesis::SharedState`], the reflection service, and default
//! `UNIMPLEMENTED` servers for everything else.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, trivial_casts, unused_lifetimes)]

pub mod abci;
pub mod config;
pub mod error;
pub mod genesis;
pub mod kvstore;
pub mod modules;
pub mod reflection;
pub mod server;
pub mod unimplemented;
pub mod util;
