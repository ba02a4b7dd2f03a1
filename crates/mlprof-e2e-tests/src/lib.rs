//! End-to-end tests for mlprof live in `tests/`.
