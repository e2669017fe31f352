//! Building entry trees from the filesystem
//!
//! `Scanner` reads a real directory into an in-memory [`Entry`](crate::Entry)
//! tree that any visitor can then walk.

mod config;
mod scanner;
mod utils;

pub use config::ScanConfig;
pub use scanner::Scanner;
