//! Integration tests for `fsx_fs` live under `tests/`.
