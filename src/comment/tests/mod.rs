//! Unit tests for the comment context.
