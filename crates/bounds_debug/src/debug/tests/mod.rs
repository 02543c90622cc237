//! Integration tests for the bounds debug pipeline

mod bounds_lifecycle;
