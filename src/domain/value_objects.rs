//! Domain value objects representing immutable concepts

use super::errors::DomainError;
use std::fmt;

/// Normalized name of a runnable component.
///
/// Input is lowercased and every space becomes a hyphen, so
/// `"Index Vulnrichment"` and `"INDEX-VULNRICHMENT"` both resolve to
/// `index-vulnrichment`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = Self::normalize(raw);
        if normalized.trim_matches('-').is_empty() {
            return Err(DomainError::EmptyComponentName);
        }
        Ok(Self(normalized))
    }

    /// Lowercase and replace spaces with hyphens. Does not validate.
    pub fn normalize(raw: &str) -> String {
        raw.replace(' ', "-").to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single URL path segment such as an index name or rule type.
///
/// Restricted to ASCII lowercase letters, digits, `-`, `_` and `.` so it can be
/// placed in a request path without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment(String);

impl PathSegment {
    pub fn new(field: &str, value: &str) -> Result<Self, DomainError> {
        let valid = !value.is_empty()
            && value != "."
            && value != ".."
            && value.chars().all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')
            });

        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(DomainError::InvalidPathSegment {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query filters for an index lookup, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexQuery {
    params: Vec<(&'static str, String)>,
}

impl IndexQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cve(self, cve: impl Into<String>) -> Self {
        self.with("cve", cve.into())
    }

    pub fn botnet(self, botnet: impl Into<String>) -> Self {
        self.with("botnet", botnet.into())
    }

    pub fn country(self, country: impl Into<String>) -> Self {
        self.with("country", country.into())
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.with("id", id.into())
    }

    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit.to_string())
    }

    pub fn page(self, page: u32) -> Self {
        self.with("page", page.to_string())
    }

    /// Setting a key twice replaces the earlier value in place
    fn with(mut self, key: &'static str, value: String) -> Self {
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
