//! # SimHost Core
//!
//! Name-based plugin registry and dispatch tables for the SimHost
//! simulation framework.
//!
//! Independently loaded modules (device models, analysis commands, output
//! formatters) register entries under one or more names by constructing
//! [`Installed`] guards; client code later resolves entries by name, or by
//! consuming a token from a command scanner. One static [`Dispatcher`]
//! exists per capability kind.
//!
//! The tables are built for static-duration use: [`Dispatcher::new`] is
//! `const` and the backing map is created on the first installation, so
//! registration works no matter what order the host links and initializes
//! its modules.

pub mod dispatch;
pub mod options;
pub mod scanner;

pub use dispatch::{DispatchTable, Dispatcher, Installed};
pub use scanner::TextScanner;
