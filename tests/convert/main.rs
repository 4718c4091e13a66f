//! Integration tests for Layer 1: Convert
//!
//! Tests for numeric parsing, boolean parsing, and rendering.

mod numbers;
mod render;
