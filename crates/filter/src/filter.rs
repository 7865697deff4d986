//! Tag-narrowing filter over person records.

use persona_core::{
    Admin, AdminCriteria, Criteria, FieldMap, Person, PersonaResult, Tag, User, UserCriteria,
    Variant,
};

/// Returns the records of variant `V` that satisfy `criteria`, in input order.
///
/// Two stages over one linear pass:
///   1. Keep records whose tag is `V::TAG`, narrowed to `V`.
///   2. Keep those whose every constrained field equals the criteria value.
///
/// Stable: no reordering, no deduplication. The input is only borrowed.
pub fn filter_persons<V: Variant>(persons: &[Person], criteria: &V::Criteria) -> Vec<V> {
    let selected: Vec<V> = persons
        .iter()
        .filter_map(V::from_person)
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    tracing::debug!(
        variant = %V::TAG,
        scanned = persons.len(),
        matched = selected.len(),
        "filtered persons"
    );

    selected
}

pub fn filter_users(persons: &[Person], criteria: &UserCriteria) -> Vec<User> {
    filter_persons::<User>(persons, criteria)
}

pub fn filter_admins(persons: &[Person], criteria: &AdminCriteria) -> Vec<Admin> {
    filter_persons::<Admin>(persons, criteria)
}

// ---------------------------------------------------------------------------
// Untyped boundary
// ---------------------------------------------------------------------------

/// Result of a filter whose variant was only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filtered {
    Users(Vec<User>),
    Admins(Vec<Admin>),
}

impl Filtered {
    pub fn tag(&self) -> Tag {
        match self {
            Filtered::Users(_) => Tag::User,
            Filtered::Admins(_) => Tag::Admin,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Filtered::Users(v) => v.len(),
            Filtered::Admins(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One display line per record.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Filtered::Users(v) => v.iter().map(ToString::to_string).collect(),
            Filtered::Admins(v) => v.iter().map(ToString::to_string).collect(),
        }
    }

    /// Widens the narrowed records back into tagged persons.
    pub fn into_persons(self) -> Vec<Person> {
        match self {
            Filtered::Users(v) => v.into_iter().map(Person::from).collect(),
            Filtered::Admins(v) => v.into_iter().map(Person::from).collect(),
        }
    }
}

/// Filters by a variant tag parsed at runtime.
///
/// Unknown tags fail with `InvalidVariant`; criteria keys outside the
/// variant's non-tag fields fail with `InvalidCriteriaField`. Both are
/// checked before any record is scanned.
pub fn filter_dynamic(
    persons: &[Person],
    variant: &str,
    fields: &FieldMap,
) -> PersonaResult<Filtered> {
    let tag: Tag = variant.parse()?;
    filter_tagged(persons, tag, fields)
}

/// Filters by an already-parsed tag with untyped criteria.
pub fn filter_tagged(
    persons: &[Person],
    tag: Tag,
    fields: &FieldMap,
) -> PersonaResult<Filtered> {
    Ok(match tag {
        Tag::User => Filtered::Users(filter_users(persons, &UserCriteria::from_fields(fields)?)),
        Tag::Admin => {
            Filtered::Admins(filter_admins(persons, &AdminCriteria::from_fields(fields)?))
        }
    })
}
