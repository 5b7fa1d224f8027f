//! Workspace-level test crate. The integration tests live in `tests/`.
