//! docker build/push command emission for mssqlbuild.
//!
//! # Output
//!
//! ```text
//! mssqlbuild | bash -ex
//!   1. Tag set   ── configured tags + extra tag, deduplicated, sorted
//!   2. Build     ── one `docker build` line per tag
//!   3. Push      ── one `docker push <repository>` line, always last
//! ```
//!
//! # Untagged push
//!
//! The push line names the repository without a tag. Which tags the client
//! and registry actually push for such a reference is outside this crate's
//! control; with current docker clients every local tag of the repository
//! is pushed.

pub mod command;
pub mod emitter;

pub use command::{BuildCommand, EmittedCommand, PushCommand};
pub use emitter::CommandEmitter;
