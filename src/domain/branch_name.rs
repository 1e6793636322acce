use git2::Branch;
use serde::{Deserialize, Serialize};

/// A branch of the downstream project that Travis should build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Creates a new `BranchName`, rejecting names git would refuse as a branch.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() || name.contains('\0') {
            return Err("Branch name must not be empty.".to_string());
        }
        if Branch::name_is_valid(&name).unwrap_or(false) {
            Ok(Self(name))
        } else {
            Err(format!("'{name}' is not a valid branch name."))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BranchName> for String {
    fn from(value: BranchName) -> Self {
        value.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
