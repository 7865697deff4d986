//! Variant filter, report renderer, and data sinks.

pub mod filter;
pub mod reporter;
pub mod sink;

pub use filter::{
    filter_admins, filter_dynamic, filter_persons, filter_tagged, filter_users, Filtered,
};
