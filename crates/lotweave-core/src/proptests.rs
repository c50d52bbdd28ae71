//! Property-based tests for the validator and record model.
