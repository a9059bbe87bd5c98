//! Pipeline orchestration, observers, and the JSON options document with its
//! validation engine.

pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;
