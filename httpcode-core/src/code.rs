use crate::error::StatusError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A three-digit HTTP status code, kept in its textual form.
///
/// Only the digit count is checked; `999` is a valid `StatusCode` even though
/// no such status exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusCode(String);

/// Status code → description, ordered by code.
pub type DescriptionMap = BTreeMap<StatusCode, String>;

impl StatusCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn class(&self) -> StatusClass {
        StatusClass::from_first_digit(self.0.as_bytes()[0])
    }
}

impl FromStr for StatusCode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(StatusCode(s.to_string()))
        } else {
            Err(StatusError::InvalidCode(s.to_string()))
        }
    }
}

impl TryFrom<String> for StatusCode {
    type Error = StatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusCode> for String {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

// Ordering and equality come from the inner string, so maps can be queried by `&str`.
impl Borrow<str> for StatusCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusClass {
    fn from_first_digit(digit: u8) -> Self {
        match digit {
            b'1' => StatusClass::Informational,
            b'2' => StatusClass::Success,
            b'3' => StatusClass::Redirection,
            b'4' => StatusClass::ClientError,
            b'5' => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Informational => "informational",
            StatusClass::Success => "success",
            StatusClass::Redirection => "redirection",
            StatusClass::ClientError => "client error",
            StatusClass::ServerError => "server error",
            StatusClass::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        assert_eq!("404".parse::<StatusCode>().unwrap().as_str(), "404");
        assert_eq!("999".parse::<StatusCode>().unwrap().as_str(), "999");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        for input in ["abc", "12", "1234", "", " 404", "4o4", "٤٠٤"] {
            assert!(
                matches!(input.parse::<StatusCode>(), Err(StatusError::InvalidCode(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_class_from_first_digit() {
        let class = |s: &str| s.parse::<StatusCode>().unwrap().class();
        assert_eq!(class("101"), StatusClass::Informational);
        assert_eq!(class("204"), StatusClass::Success);
        assert_eq!(class("308"), StatusClass::Redirection);
        assert_eq!(class("451"), StatusClass::ClientError);
        assert_eq!(class("503"), StatusClass::ServerError);
        assert_eq!(class("700"), StatusClass::Unknown);
    }

    #[test]
    fn test_serializes_as_json_object_key() {
        let mut map = DescriptionMap::new();
        map.insert("200".parse().unwrap(), "OK".to_string());

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"200":"OK"}"#);

        let back: DescriptionMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_deserialize_rejects_invalid_key() {
        let result: Result<DescriptionMap, _> = serde_json::from_str(r#"{"20":"OK"}"#);
        assert!(result.is_err());
    }
}
