use serde::{Deserialize, Serialize};
use std::fmt;

/// Role name value object
///
/// # Invariants
/// - Must not be blank (empty or whitespace only)
/// - Surrounding whitespace is trimmed
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    /// Creates a new RoleName value object
    ///
    /// # Returns
    /// * `Ok(RoleName)` - If the name is not blank
    /// * `Err(String)` - If the name is blank
    ///
    /// # Example
    /// ```
    /// use ecore_roles_api::domain::role::RoleName;
    ///
    /// let name = RoleName::new("  Developer ").expect("valid name");
    /// assert_eq!(name.as_str(), "Developer");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Role name cannot be blank".to_string());
        }
        Ok(RoleName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoleName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RoleName::new(value)
    }
}

impl From<RoleName> for String {
    fn from(name: RoleName) -> Self {
        name.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
