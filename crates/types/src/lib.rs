/// Errors that can occur when creating validated access codes.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// The input contained no letters or digits
    #[error("Access code must contain at least one letter or digit")]
    Empty,
}

/// A user-chosen access code reduced to its alphanumeric form.
///
/// This type wraps a `String` and guarantees that it contains only letters
/// and digits. Every other character of the raw input (separators, dots,
/// whitespace, punctuation) is stripped during construction, so the value is
/// always safe to use as a single path component. Two raw inputs whose
/// filtered forms are equal compare equal and address the same storage
/// partition.
///
/// Sanitization is idempotent: constructing an `AccessCode` from an already
/// sanitized code yields the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessCode(String);

impl AccessCode {
    /// Creates a new `AccessCode` from the given raw input.
    ///
    /// All non-alphanumeric characters are removed. If nothing remains after
    /// filtering, an error is returned — a partition may never be keyed by
    /// the empty string.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(AccessCode)` if the filtered input is non-empty,
    /// or `Err(CodeError::Empty)` if no letter or digit survives.
    pub fn new(input: impl AsRef<str>) -> Result<Self, CodeError> {
        let filtered: String = input
            .as_ref()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        if filtered.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self(filtered))
    }

    /// Returns the sanitized code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccessCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for AccessCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for AccessCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AccessCode::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_alphanumeric_input_unchanged() {
        let code = AccessCode::new("Alex8899").unwrap();
        assert_eq!(code.as_str(), "Alex8899");
    }

    #[test]
    fn strips_separators_and_punctuation() {
        let code = AccessCode::new("abc-123").unwrap();
        assert_eq!(code.as_str(), "abc123");

        let code = AccessCode::new("../../etc/passwd").unwrap();
        assert_eq!(code.as_str(), "etcpasswd");
    }

    #[test]
    fn filtered_collisions_compare_equal() {
        let a = AccessCode::new("abc-123").unwrap();
        let b = AccessCode::new("abc123").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sanitization_is_idempotent() {
        let once = AccessCode::new("a b!c_9").unwrap();
        let twice = AccessCode::new(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_input_with_no_alphanumerics() {
        assert!(matches!(AccessCode::new(""), Err(CodeError::Empty)));
        assert!(matches!(AccessCode::new("../.."), Err(CodeError::Empty)));
        assert!(matches!(AccessCode::new("  !!  "), Err(CodeError::Empty)));
    }

    #[test]
    fn serde_round_trip_sanitizes_on_deserialize() {
        let code = AccessCode::new("zz99").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"zz99\"");

        let parsed: AccessCode = serde_json::from_str("\"zz-99\"").unwrap();
        assert_eq!(parsed.as_str(), "zz99");

        let empty: Result<AccessCode, _> = serde_json::from_str("\"--\"");
        assert!(empty.is_err());
    }
}
