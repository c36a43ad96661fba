use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

/// Identity the server reports after login, registration or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// A user record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub name: String,
    pub lastname: String,
    #[serde(default, with = "date_only")]
    pub birthday: Option<NaiveDate>,
    pub role: Role,
    #[serde(default)]
    pub subscription: bool,
    #[serde(rename = "is_active", default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInput {
    pub name: String,
    pub lastname: String,
    #[serde(with = "date_only")]
    pub birthday: Option<NaiveDate>,
    pub subscription: bool,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub username: String,
    pub role: Role,
}

/// Partial profile update; only present fields are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "date_only")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<bool>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Dates travel as `YYYY-MM-DD`; older records carry a full timestamp.
mod date_only {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(Some(date));
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Some(dt.date_naive()))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_birthday_accepts_both_formats() {
        let plain = r#"{"username":"maria","email":"m@x.es","name":"Maria","lastname":"Lopez",
            "birthday":"1990-04-12","role":"user"}"#;
        let stamped = r#"{"username":"maria","email":"m@x.es","name":"Maria","lastname":"Lopez",
            "birthday":"1990-04-12T00:00:00.000Z","role":"admin","is_active":true}"#;

        let a: User = serde_json::from_str(plain).unwrap();
        let b: User = serde_json::from_str(stamped).unwrap();
        let expected = NaiveDate::from_ymd_opt(1990, 4, 12);
        assert_eq!(a.birthday, expected);
        assert_eq!(b.birthday, expected);
        assert_eq!(b.role, Role::Admin);
        assert_eq!(Session::from(&b).username, "maria");
    }

    #[test]
    fn update_serializes_present_fields_only() {
        let update = UserUpdate {
            name: Some("Ana".into()),
            subscription: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"name":"Ana","subscription":true}"#
        );
        assert!(UserUpdate::default().is_empty());
    }

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("root".parse::<Role>().is_err());
    }
}
