pub mod config;
pub mod error;
pub mod factory;
pub mod renderers;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::ChartError;
pub use factory::*;
pub use traits::*;
pub use types::*;
