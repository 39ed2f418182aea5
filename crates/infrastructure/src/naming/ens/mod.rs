//! Ethereum Name Service lookups over JSON-RPC.
//!
//! A lookup is two `eth_call`s: the registry's `resolver(node)` to find the
//! resolver contract, then that resolver's `text(node, key)`.
//!
//! When a name has no resolver, parent names are tried up to (not including)
//! the top-level label. A parent's resolver is used only if it supports
//! ENSIP-10, in which case the text call is wrapped in `resolve(name, data)`.

pub mod abi;
pub mod namehash;
pub mod provider;
pub mod rpc;

pub use abi::Address;
pub use namehash::namehash;
pub use provider::EnsNameProvider;
pub use rpc::{JsonRpcClient, RpcError};
