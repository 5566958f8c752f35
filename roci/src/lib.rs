mod clients;
mod error;
mod traits;

pub use clients::*;
pub use error::*;
pub use traits::*;

// re-export
pub use async_trait::async_trait;
