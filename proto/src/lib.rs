//! cosmos-rpc-proto gives the developer access to the gRPC service contract of
//! the Cosmos SDK distribution, gov, group and staking modules, the Cosmos
//! reflection service and the Tendermint ABCI application interface.
//!
//! Messages are always available. Clients are generated behind the `client`
//! feature and servers behind the `server` feature.

// This module setup is necessary because the generated code contains "super::" calls for dependencies.

#![deny(warnings, trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![allow(clippy::large_enum_variant)]
#![allow(rustdoc::bare_urls)]
#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/cosmos-rpc-proto/0.1.0")]

pub mod services;

pub mod cosmos {
    pub mod base {
        pub mod v1beta1 {
            include!("prost/cosmos.base.v1beta1.rs");
        }
        pub mod query {
            pub mod v1beta1 {
                include!("prost/cosmos.base.query.v1beta1.rs");
            }
        }
        pub mod reflection {
            pub mod v2alpha1 {
                include!("prost/cosmos.base.reflection.v2alpha1.rs");
            }
        }
    }
    pub mod distribution {
        pub mod v1beta1 {
            include!("prost/cosmos.distribution.v1beta1.rs");
        }
    }
    pub mod gov {
        pub mod v1beta1 {
            include!("prost/cosmos.gov.v1beta1.rs");
        }
    }
    pub mod group {
        pub mod v1beta1 {
            include!("prost/cosmos.group.v1beta1.rs");
        }
    }
    pub mod staking {
        pub mod v1beta1 {
            include!("prost/cosmos.staking.v1beta1.rs");
        }
    }
}

pub mod tendermint {
    /// The ABCI messages are the ones published by `tendermint-proto`; only
    /// the `ABCIApplication` client and server are generated here.
    pub mod abci {
        pub use ::tendermint_proto::abci::*;

        include!("prost/tendermint.abci.rs");
    }
}
