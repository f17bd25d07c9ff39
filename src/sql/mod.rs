//! Safe SQL builder: identifiers from static definitions only, values as parameters.

mod builder;
pub use builder::*;
