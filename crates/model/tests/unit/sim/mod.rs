//! Unit tests for the benchmark driver and its result handling.



/// Tests for whole benchmark runs.
pub mod runner;
