use serde::{Deserialize, Serialize};

/// Identifier of the commit whose successful build triggers the downstream build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Creates a new `CommitId`. Surrounding whitespace is trimmed; the
    /// remainder must be non-empty and must not contain whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use ci_trigger::CommitId;
    ///
    /// let commit = CommitId::new(" 4f2a9c1 \n").unwrap();
    /// assert_eq!(commit.as_str(), "4f2a9c1");
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, String> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err("Commit identifier must not be empty.".to_string());
        }
        if id.chars().any(char::is_whitespace) {
            return Err(format!("'{id}' is not a valid commit identifier."));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first seven characters, the way git abbreviates commits.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(7) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl TryFrom<String> for CommitId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommitId> for String {
    fn from(value: CommitId) -> Self {
        value.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
