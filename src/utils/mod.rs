pub mod console;
pub mod error;
pub mod fs;
pub mod logger;
pub mod validation;
