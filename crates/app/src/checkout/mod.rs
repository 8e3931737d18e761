//! Checkout

mod errors;
mod service;
mod session;

pub use errors::*;
pub use service::*;
pub use session::*;
