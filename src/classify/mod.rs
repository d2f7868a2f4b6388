//! Payment-code classification.
//!
//! The [`CodeClassifier`] trait is the seam to the protocol parsers. The
//! [`SchemeClassifier`] is a prefix/scheme based implementation that needs no
//! network access.

mod error;
mod scheme;
mod traits;
mod types;

pub use error::ClassificationError;
pub use scheme::SchemeClassifier;
pub use traits::{ClassifyOutcome, CodeClassifier};
pub use types::Classification;
