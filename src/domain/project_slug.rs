use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const SLUG_FORMAT: &str = "{owner}/{name}";

static SLUG_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("slug pattern is valid"));

/// Represents the slug of a repository on Travis CI.
///
/// A slug has the form `{owner}/{name}`, for example
/// `junit-pioneer/junit-pioneer.github.io`. Both parts must be non-empty and
/// may contain ASCII letters, digits, `-`, `_` and `.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectSlug {
    slug: String,
}

impl ProjectSlug {
    /// Creates a new `ProjectSlug` instance.
    ///
    /// # Arguments
    ///
    /// * `slug` - The `{owner}/{name}` slug to validate and store.
    ///
    /// # Returns
    ///
    /// Returns `Ok(ProjectSlug)` if the slug is valid, or `Err(String)` if it is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use ci_trigger::ProjectSlug;
    ///
    /// let slug = ProjectSlug::new("junit-pioneer/junit-pioneer.github.io").unwrap();
    /// assert_eq!(slug.owner(), "junit-pioneer");
    /// ```
    pub fn new(slug: impl Into<String>) -> Result<Self, String> {
        let project = ProjectSlug { slug: slug.into() };
        project.validate()?;
        Ok(project)
    }

    /// Returns the full `{owner}/{name}` slug.
    pub fn as_str(&self) -> &str {
        &self.slug
    }

    pub fn owner(&self) -> &str {
        self.slug.split('/').next().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.slug.split('/').nth(1).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), String> {
        let parts: Vec<&str> = self.slug.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|part| !SLUG_PART.is_match(part)) {
            return Err(format!(
                "'{}' is not a valid project. Use the format {SLUG_FORMAT}",
                self.slug
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for ProjectSlug {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectSlug> for String {
    fn from(value: ProjectSlug) -> Self {
        value.slug
    }
}

impl std::fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.slug)
    }
}
