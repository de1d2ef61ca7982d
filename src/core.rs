pub mod error;
pub mod marker;

mod edge;
mod store;

pub use edge::*;
pub use store::*;
