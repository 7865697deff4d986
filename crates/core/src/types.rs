//! Domain types for the persona filter.

use crate::criteria::{AdminCriteria, Criteria, UserCriteria};
use crate::error::PersonaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Discriminator selecting one of the two person variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    User,
    Admin,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::User => "user",
            Tag::Admin => "admin",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact lowercase literals only; anything else is `InvalidVariant`.
impl FromStr for Tag {
    type Err = PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Tag::User),
            "admin" => Ok(Tag::Admin),
            other => Err(PersonaError::InvalidVariant(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub occupation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Admin {
    pub name: String,
    pub age: u32,
    pub role: String,
}

/// Display line: `<name>, <age>, <occupation>`.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.age, self.occupation)
    }
}

/// Display line: `<name>, <age>, <role>`.
impl fmt::Display for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.age, self.role)
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A tagged person record.
///
/// The tag is the enum discriminant, so a record can never carry the fields
/// of both variants and its tag cannot change after construction. On the
/// JSON boundary the discriminant is the `"type"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Person {
    User(User),
    Admin(Admin),
}

impl Person {
    pub fn user(name: impl Into<String>, age: u32, occupation: impl Into<String>) -> Self {
        Person::User(User {
            name: name.into(),
            age,
            occupation: occupation.into(),
        })
    }

    pub fn admin(name: impl Into<String>, age: u32, role: impl Into<String>) -> Self {
        Person::Admin(Admin {
            name: name.into(),
            age,
            role: role.into(),
        })
    }

    pub fn tag(&self) -> Tag {
        match self {
            Person::User(_) => Tag::User,
            Person::Admin(_) => Tag::Admin,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::User(u) => &u.name,
            Person::Admin(a) => &a.name,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::User(u) => fmt::Display::fmt(u, f),
            Person::Admin(a) => fmt::Display::fmt(a, f),
        }
    }
}

impl From<User> for Person {
    fn from(user: User) -> Self {
        Person::User(user)
    }
}

impl From<Admin> for Person {
    fn from(admin: Admin) -> Self {
        Person::Admin(admin)
    }
}

// ---------------------------------------------------------------------------
// Narrowing
// ---------------------------------------------------------------------------

/// A concrete person variant that a filter can narrow to.
///
/// The implementing type stands in for the tag: choosing `V` fixes both the
/// records that survive and the criteria type accepted for them.
pub trait Variant: Clone + fmt::Display {
    const TAG: Tag;

    /// Criteria over this variant's non-tag fields.
    type Criteria: Criteria<Self>;

    /// Projects a person onto this variant, `None` if the tag differs.
    fn from_person(person: &Person) -> Option<&Self>;
}

impl Variant for User {
    const TAG: Tag = Tag::User;
    type Criteria = UserCriteria;

    #[inline]
    fn from_person(person: &Person) -> Option<&Self> {
        match person {
            Person::User(u) => Some(u),
            Person::Admin(_) => None,
        }
    }
}

impl Variant for Admin {
    const TAG: Tag = Tag::Admin;
    type Criteria = AdminCriteria;

    #[inline]
    fn from_person(person: &Person) -> Option<&Self> {
        match person {
            Person::Admin(a) => Some(a),
            Person::User(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_parses_known_literals() {
        assert_eq!("user".parse::<Tag>().unwrap(), Tag::User);
        assert_eq!("admin".parse::<Tag>().unwrap(), Tag::Admin);
    }

    #[test]
    fn tag_rejects_unknown_literal() {
        let err = "Admin".parse::<Tag>().unwrap_err();
        assert!(matches!(err, PersonaError::InvalidVariant(ref s) if s == "Admin"));
    }

    #[test]
    fn display_line_uses_variant_field() {
        let user = Person::user("Wilson", 23, "Ball");
        let admin = Person::admin("Jane Doe", 32, "Administrator");
        assert_eq!(user.to_string(), "Wilson, 23, Ball");
        assert_eq!(admin.to_string(), "Jane Doe, 32, Administrator");
    }

    #[test]
    fn json_uses_type_discriminator() {
        let p = Person::admin("Agent Smith", 23, "Anti-virus engineer");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["type"], "admin");
        assert_eq!(v["role"], "Anti-virus engineer");
        assert!(v.get("occupation").is_none());

        let back: Person = serde_json::from_value(v).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn json_rejects_unknown_type() {
        let raw = r#"{"type":"guest","name":"x","age":1}"#;
        assert!(serde_json::from_str::<Person>(raw).is_err());
    }

    #[test]
    fn projection_matches_tag() {
        let user = Person::user("Max Mustermann", 25, "Chimney sweep");
        assert!(User::from_person(&user).is_some());
        assert!(Admin::from_person(&user).is_none());
        assert_eq!(user.tag(), User::TAG);
    }
}
