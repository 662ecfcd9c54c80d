pub mod common;
pub mod establishment;
pub mod filter;
pub mod quotation;
pub mod summary;

pub use common::*;
pub use establishment::*;
pub use filter::*;
pub use quotation::*;
pub use summary::*;
