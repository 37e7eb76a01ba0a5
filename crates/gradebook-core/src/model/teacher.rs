//! Teachers.

use crate::error::Result;
use crate::traits::Entity;

use super::require_non_blank;

/// A teacher. Courses point at their teacher; teachers do not track courses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Teacher {
    id: String,
    name: String,
    address: String,
}

impl Teacher {
    /// Create a teacher, validating that no field is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: require_non_blank("teacher", "id", id)?,
            name: require_non_blank("teacher", "name", name)?,
            address: require_non_blank("teacher", "address", address)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Copy of this teacher with a different name.
    pub fn with_name(self, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_non_blank("teacher", "name", name)?,
            ..self
        })
    }

    /// Copy of this teacher with a different address.
    pub fn with_address(self, address: impl Into<String>) -> Result<Self> {
        Ok(Self {
            address: require_non_blank("teacher", "address", address)?,
            ..self
        })
    }
}

impl Entity for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}
