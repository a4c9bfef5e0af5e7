//! Demo resource domain model.

mod model;

pub use model::{Demo, DemoFilter, DemoPatch, NewDemo, DELETED, NOT_DELETED};
