pub mod aggregation;
pub mod collation;
pub mod error;
pub mod establishments;
pub mod quotations;

pub use aggregation::*;
pub use collation::locale_cmp;
pub use error::RepoError;
pub use establishments::*;
pub use quotations::*;
