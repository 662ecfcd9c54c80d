pub mod error;
pub mod file_store;
pub mod json_file;
pub mod traits;

pub use error::*;
pub use file_store::*;
pub use json_file::*;
pub use traits::*;
