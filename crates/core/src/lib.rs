//! Person records, per-variant criteria, and error definitions.
//!
//! Foundation crate -- no I/O dependencies.

pub mod criteria;
pub mod error;
pub mod types;

pub use criteria::{AdminCriteria, Criteria, FieldMap, UserCriteria};
pub use error::{PersonaError, PersonaResult};
pub use types::{Admin, Person, Tag, User, Variant};
