//! Input records for résumé rendering.
//!
//! These are read-only snapshots handed to the renderer by the surrounding
//! application; the renderer never mutates or persists them. Field names on
//! the wire are camelCase, matching the records the data store keeps.

mod resume;

pub use resume::{Education, Resume, WorkExperience};
