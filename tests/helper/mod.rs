#![allow(dead_code)]

pub mod project;
pub mod registry;

pub use project::ProjectFixture;
pub use registry::MockRegistry;
