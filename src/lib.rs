pub mod analyzer;
pub mod avltree;
pub mod config;
pub mod dataset;
pub mod error;
pub mod set;
pub mod student;
pub mod util;
