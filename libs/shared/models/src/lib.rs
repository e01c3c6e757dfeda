pub mod error;
pub mod language;

pub use error::AppError;
pub use language::Language;
