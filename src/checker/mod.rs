mod content;
mod property;
mod result;
mod verdict;

pub use content::{CHUNK_SIZE, ContentScanner};
pub use property::PropertyEvaluator;
pub use result::{Finding, Severity};
pub use verdict::{resolve, worst};
