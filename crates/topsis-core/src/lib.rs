pub mod error;
pub mod impact;
pub mod matrix;
pub mod ranker;

pub use error::TopsisError;
pub use impact::*;
pub use matrix::*;
pub use ranker::*;
