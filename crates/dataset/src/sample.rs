//! Built-in sample dataset.
//!
//! Three users and three admins, interleaved, in a fixed order. Used as the default
//! source by the CLI and as the fixture for filter tests.

use crate::PersonSource;
use persona_core::{Person, PersonaResult};
use std::sync::LazyLock;

/// Returns the sample records in their canonical order.
pub fn persons() -> &'static [Person] {
    &SAMPLE
}

static SAMPLE: LazyLock<Vec<Person>> = LazyLock::new(|| {
    vec![
        Person::user("Max Mustermann", 25, "Chimney sweep"),
        Person::admin("Jane Doe", 32, "Administrator"),
        Person::user("Kate Müller", 23, "Astronaut"),
        Person::admin("Bruce Willis", 64, "World saver"),
        Person::user("Wilson", 23, "Ball"),
        Person::admin("Agent Smith", 23, "Anti-virus engineer"),
    ]
});

/// [`PersonSource`] over the built-in sample set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl PersonSource for SampleSource {
    fn load(&self) -> PersonaResult<Vec<Person>> {
        Ok(persons().to_vec())
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}
