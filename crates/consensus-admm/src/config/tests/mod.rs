//! Tests for solver configuration types.
