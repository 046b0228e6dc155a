// Utility functions
pub mod error;
pub mod file_intake;

pub use error::*;
pub use file_intake::*;
