use crate::error::Result;

/// Check that an entity's arrays agree with the shape it claims.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
