//! [`roci::Operator`] and [`roci::Navigator`] implementations speaking
//! JSON over HTTP to a navigation web bridge.

mod client;
mod utils;

pub use crate::client::*;
