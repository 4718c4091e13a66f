//! Integration tests for Layer 1: Sequence
//!
//! Tests the slice helpers together and their algebraic relationships.

mod properties;
