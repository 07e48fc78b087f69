//! minifs - an in-memory hierarchical namespace with a line shell
//!
//! The core is the node tree (an arena addressed by stable handles), the
//! path resolver and the structural operations built on them. Around it:
//! a binary snapshot codec, a JSON tree export, and a small command shell
//! that dispatches path-addressed commands against a single session.

pub mod commands;
pub mod fs;
pub mod shell;

pub use fs::{FsError, NodeKind, Vfs};
pub use shell::{Shell, ShellOptions};
