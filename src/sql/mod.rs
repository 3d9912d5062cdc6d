//! SQL text for each endpoint: identifiers from the declared schema only, values as parameters.

mod builder;
pub use builder::*;
