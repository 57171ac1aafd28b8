//! psurf core: shared error type, tolerances, and validation traits.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{PsurfError, Result};
pub use tolerance::Tolerance;
pub use traits::Validate;
