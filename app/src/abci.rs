//! The ABCI application interface and the service that enforces its calling
//! order.

pub mod application;
pub mod lifecycle;
pub mod service;

pub use application::Application;
pub use lifecycle::{Call, Lifecycle, Phase};
pub use service::AbciService;
