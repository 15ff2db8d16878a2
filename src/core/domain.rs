use std::env;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_LIBRARY_KEY: &str = "library";
pub const DEFAULT_USER_KEY: &str = "user";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// RecordId is an identifier issued by the remote store, which serves
// numeric ids for rows but may also hand out opaque strings.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

// User is the signed-in identity; its absence means local-only mode.
// Any other attributes stored alongside the id are carried through untouched.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn new<I: Into<RecordId>>(id: I) -> Self {
        User {
            id: id.into(),
            attributes: serde_json::Map::new(),
        }
    }
}

// Configuration abstracts config options for the shelf manager
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub api_base: String,
    pub library_key: String,
    pub user_key: String,
}

impl Configuration {
    pub fn new(api_base: &str) -> Self {
        Configuration {
            api_base: api_base.trim_end_matches('/').to_string(),
            library_key: DEFAULT_LIBRARY_KEY.to_string(),
            user_key: DEFAULT_USER_KEY.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let api_base = env::var("SHELFSYNC_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let mut config = Configuration::new(api_base.as_str());
        if let Ok(key) = env::var("SHELFSYNC_LIBRARY_KEY") {
            config.library_key = key;
        }
        if let Ok(key) = env::var("SHELFSYNC_USER_KEY") {
            config.user_key = key;
        }
        config
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, RecordId, User};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("http://books.test/api/v1/");
        assert_eq!("http://books.test/api/v1", config.api_base.as_str());
        assert_eq!("library", config.library_key.as_str());
        assert_eq!("user", config.user_key.as_str());
    }

    #[tokio::test]
    async fn test_should_parse_record_ids() {
        let id: RecordId = serde_json::from_str("42").expect("should parse number");
        assert_eq!(RecordId::Number(42), id);
        let id: RecordId = serde_json::from_str("\"a-1\"").expect("should parse text");
        assert_eq!(RecordId::Text("a-1".to_string()), id);
        assert_eq!("42", RecordId::from(42).to_string());
    }

    #[tokio::test]
    async fn test_should_keep_user_attributes() {
        let user: User = serde_json::from_str(r#"{"id": 7, "username": "reader"}"#).expect("should parse user");
        assert_eq!(RecordId::Number(7), user.id);
        assert_eq!(Some(&serde_json::json!("reader")), user.attributes.get("username"));
        let json = serde_json::to_value(&user).expect("should serialize user");
        assert_eq!(serde_json::json!({"id": 7, "username": "reader"}), json);
    }
}
