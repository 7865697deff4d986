//! Per-variant match criteria.
//!
//! Each variant has its own criteria struct holding only that variant's
//! non-tag fields, every one optional. An unset field places no constraint;
//! a set field must equal the record's value exactly.
//!
//! [`FieldMap`] is the untyped form used at boundaries (CLI arguments, JSON
//! payloads). Converting it into a typed criteria validates every key up
//! front, so a bad key rejects the whole call before any record is scanned.

use crate::error::{PersonaError, PersonaResult};
use crate::types::{Admin, Tag, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Untyped criteria: field name -> exact match value.
pub type FieldMap = BTreeMap<String, Value>;

/// Matching and boundary conversion for one variant's criteria.
pub trait Criteria<V>: Default {
    /// True when every set field equals the record's field.
    fn matches(&self, record: &V) -> bool;

    /// True when no field is constrained.
    fn is_empty(&self) -> bool;

    /// Builds typed criteria from a field map, rejecting keys that are not
    /// non-tag fields of the variant.
    fn from_fields(fields: &FieldMap) -> PersonaResult<Self>;

    /// The constrained fields, in field-map form.
    fn to_fields(&self) -> FieldMap;
}

#[inline]
fn field_eq<T: PartialEq + ?Sized>(want: Option<&T>, have: &T) -> bool {
    want.map_or(true, |w| w == have)
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

impl UserCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }
}

impl Criteria<User> for UserCriteria {
    fn matches(&self, record: &User) -> bool {
        field_eq(self.name.as_deref(), record.name.as_str())
            && field_eq(self.age.as_ref(), &record.age)
            && field_eq(self.occupation.as_deref(), record.occupation.as_str())
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.occupation.is_none()
    }

    fn from_fields(fields: &FieldMap) -> PersonaResult<Self> {
        let mut criteria = Self::default();
        for (field, value) in fields {
            match field.as_str() {
                "name" => criteria.name = Some(text(field, value)?),
                "age" => criteria.age = Some(age(field, value)?),
                "occupation" => criteria.occupation = Some(text(field, value)?),
                _ => {
                    return Err(PersonaError::InvalidCriteriaField {
                        variant: Tag::User,
                        field: field.clone(),
                    })
                }
            }
        }
        Ok(criteria)
    }

    fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        if let Some(name) = &self.name {
            fields.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(age) = self.age {
            fields.insert("age".into(), Value::from(age));
        }
        if let Some(occupation) = &self.occupation {
            fields.insert("occupation".into(), Value::from(occupation.as_str()));
        }
        fields
    }
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AdminCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl Criteria<Admin> for AdminCriteria {
    fn matches(&self, record: &Admin) -> bool {
        field_eq(self.name.as_deref(), record.name.as_str())
            && field_eq(self.age.as_ref(), &record.age)
            && field_eq(self.role.as_deref(), record.role.as_str())
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.role.is_none()
    }

    fn from_fields(fields: &FieldMap) -> PersonaResult<Self> {
        let mut criteria = Self::default();
        for (field, value) in fields {
            match field.as_str() {
                "name" => criteria.name = Some(text(field, value)?),
                "age" => criteria.age = Some(age(field, value)?),
                "role" => criteria.role = Some(text(field, value)?),
                _ => {
                    return Err(PersonaError::InvalidCriteriaField {
                        variant: Tag::Admin,
                        field: field.clone(),
                    })
                }
            }
        }
        Ok(criteria)
    }

    fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        if let Some(name) = &self.name {
            fields.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(age) = self.age {
            fields.insert("age".into(), Value::from(age));
        }
        if let Some(role) = &self.role {
            fields.insert("role".into(), Value::from(role.as_str()));
        }
        fields
    }
}

// ---------------------------------------------------------------------------
// Value coercion
// ---------------------------------------------------------------------------

fn text(field: &str, value: &Value) -> PersonaResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| PersonaError::InvalidCriteriaValue {
            field: field.to_string(),
            reason: format!("expected a string, got {value}"),
        })
}

fn age(field: &str, value: &Value) -> PersonaResult<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| PersonaError::InvalidCriteriaValue {
            field: field.to_string(),
            reason: format!("expected a non-negative integer, got {value}"),
        })
}
