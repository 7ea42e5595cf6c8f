use crate::error::{ApiError, ApiResult};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A validated URL path segment.
///
/// `Routable` implementations may back `url_name()` with any string; this
/// type is for the ones that want the structural rules checked once at
/// construction instead of surfacing as resolution misses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct UrlName(SmolStr);

impl UrlName {
    /// Validate `raw` as a single URL tree level.
    ///
    /// Rejects empty segments, segments containing `/`, and the relative
    /// components `.` and `..`.
    pub fn new(raw: impl AsRef<str>) -> ApiResult<Self> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(ApiError::EmptySegment);
        }
        if raw.contains('/') {
            return Err(ApiError::EmbeddedSeparator(raw.to_string()));
        }
        if raw == "." || raw == ".." {
            return Err(ApiError::RelativeComponent(raw.to_string()));
        }
        Ok(Self(SmolStr::new(raw)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Compose the full path of this segment beneath `parent`.
    ///
    /// `"/"` and trailing-slash parents normalize to a single separator.
    pub fn join_under(&self, parent: &str) -> String {
        join(parent, self.0.as_str())
    }
}

pub(crate) fn join(parent: &str, name: &str) -> String {
    let parent = parent.trim_end_matches('/');
    format!("{parent}/{name}")
}

impl fmt::Display for UrlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for UrlName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for UrlName {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for UrlName {
    type Error = ApiError;

    fn try_from(value: &str) -> ApiResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for UrlName {
    type Error = ApiError;

    fn try_from(value: String) -> ApiResult<Self> {
        Self::new(value)
    }
}

impl JsonSchema for UrlName {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("UrlName")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_segment() {
        let name = UrlName::new("job").unwrap();
        assert_eq!(name.as_str(), "job");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(UrlName::new(""), Err(ApiError::EmptySegment));
    }

    #[test]
    fn rejects_embedded_separator() {
        assert_eq!(
            UrlName::new("a/b"),
            Err(ApiError::EmbeddedSeparator("a/b".to_string()))
        );
    }

    #[test]
    fn rejects_relative_components() {
        assert_eq!(
            UrlName::new("."),
            Err(ApiError::RelativeComponent(".".to_string()))
        );
        assert_eq!(
            UrlName::new(".."),
            Err(ApiError::RelativeComponent("..".to_string()))
        );
    }

    #[test]
    fn join_normalizes_parent_slashes() {
        let name = UrlName::new("job").unwrap();
        assert_eq!(name.join_under("/tree"), "/tree/job");
        assert_eq!(name.join_under("/tree/"), "/tree/job");
        assert_eq!(name.join_under("/"), "/job");
    }

    #[test]
    fn serde_revalidates_on_deserialize() {
        let name = UrlName::new("job").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"job\"");

        let back: UrlName = serde_json::from_str("\"job\"").unwrap();
        assert_eq!(back, name);

        assert!(serde_json::from_str::<UrlName>("\"a/b\"").is_err());
        assert!(serde_json::from_str::<UrlName>("\"\"").is_err());
    }
}
