//! Collaborator traits defined in `tracker-core` and implemented by other crates.

pub mod people;

pub use people::{PeopleDirectory, Person};
