//! Resource locators and their display names.

mod name;

pub use name::resolve_name;

use crate::error::Result;

/// A candidate locator together with the name its result is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub locator: String,
    pub name: String,
}

impl ResourceDescriptor {
    /// Builds a descriptor, failing with `InvalidLocator` if no name can be derived.
    pub fn parse(locator: &str) -> Result<Self> {
        let name = resolve_name(locator)?;
        Ok(Self {
            locator: locator.to_string(),
            name: name.to_string(),
        })
    }
}
