//! Person record sources for persona.

pub mod file;
pub mod sample;

use persona_core::{Person, PersonaResult};

pub use file::JsonFileSource;
pub use sample::SampleSource;

/// Abstraction for loading person records from any source.
pub trait PersonSource {
    fn load(&self) -> PersonaResult<Vec<Person>>;

    /// Human-readable origin, used in log lines and reports.
    fn describe(&self) -> String;
}
