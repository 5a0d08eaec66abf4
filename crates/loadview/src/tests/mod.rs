//! Crate-level law and scenario tests for the view pipeline.

mod scenario;
