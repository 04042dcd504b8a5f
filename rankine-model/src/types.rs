// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shared types.

use std::error::Error;
use std::fmt;

/// A CMOS process node identified by its feature size in nanometres.
pub type NodeNm = u32;

// Model errors

#[macro_export]
/// Build an `Err(ModelError::InvalidInput)` from a format string
macro_rules! model_error {
    ($($arg:tt)+) => {
        Err($crate::types::ModelError::InvalidInput(format!($($arg)+)))
    };
}

#[macro_export]
/// Build an `Err(ModelError::InternalInvariant)` from a format string
///
/// These indicate inconsistent model tables rather than bad user input.
macro_rules! invariant_error {
    ($($arg:tt)+) => {
        Err($crate::types::ModelError::InternalInvariant(format!($($arg)+)))
    };
}

/// The `ModelError` is what should be returned in the case of an error
#[derive(Clone, Debug, PartialEq)]
pub enum ModelError {
    /// The node is not a key of the process technology table.
    UnsupportedNode {
        node_nm: NodeNm,
        supported: Vec<NodeNm>,
    },

    /// A required input was not provided.
    MissingRequiredInput(String),

    /// An input was provided but is not usable (for example not positive).
    InvalidInput(String),

    /// The model tables are inconsistent with each other.
    InternalInvariant(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::UnsupportedNode { node_nm, supported } => {
                let supported: Vec<String> = supported.iter().map(|n| n.to_string()).collect();
                write!(
                    f,
                    "Error: Unsupported CMOS node {node_nm}nm. Supported nodes are: {}",
                    supported.join(",")
                )
            }
            ModelError::MissingRequiredInput(msg) => write!(f, "Error: {msg}"),
            ModelError::InvalidInput(msg) => write!(f, "Error: {msg}"),
            ModelError::InternalInvariant(msg) => {
                write!(f, "Error: internal model invariant violated: {msg}")
            }
        }
    }
}

impl Error for ModelError {}

/// The ModelResult is the return type for most model functions
pub type ModelResult<T> = Result<T, ModelError>;
