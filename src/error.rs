use std::{io, path::PathBuf};

use thiserror::Error;

/// A broken invariant found by [`AVLTree::verify`](crate::avltree::AVLTree::verify).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("cached height {cached} differs from computed height {computed} at in-order position {position}")]
    HeightMismatch {
        position: usize,
        cached: isize,
        computed: isize,
    },

    #[error("balance factor {factor} out of range at in-order position {position}")]
    Unbalanced { position: usize, factor: isize },

    #[error("key at in-order position {position} is not greater than its predecessor")]
    OutOfOrder { position: usize },

    #[error("size is {size} but the tree holds {nodes} nodes")]
    SizeMismatch { size: usize, nodes: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single dataset row was rejected. Rejected rows are skipped, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field `{field}` is not an integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("field `{field}` is not a number: {value:?}")]
    InvalidFloat { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("argument `{name}` must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("unexpected extra argument {0:?}")]
    UnexpectedArgument(String),
}
