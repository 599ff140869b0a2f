//! The four price operations and their descriptor table.
//!
//! Every operation runs the same pipeline. What differs between them (the
//! procedure called, the order of its parameters, the wording of the
//! summary) lives in [`OperationKind::descriptor`].

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four mutations exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Update,
    Insert,
    Delete,
    Reactivate,
}

/// A positional parameter of a price procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    IdList,
    Sku,
    Price,
    UserName,
}

impl Param {
    /// Parameter name as declared by the stored procedure.
    pub fn name(self) -> &'static str {
        match self {
            Param::IdList => "@id_list",
            Param::Sku => "@sku",
            Param::Price => "@price",
            Param::UserName => "@user_name",
        }
    }
}

/// Static description of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub kind: OperationKind,
    /// Last part of the three-part procedure name.
    pub procedure: &'static str,
    /// Parameters in binding order.
    pub params: &'static [Param],
    /// Past-tense verb used in the summary.
    pub verb: &'static str,
    /// What the affected count is counting, as worded in the summary.
    pub noun: &'static str,
}

const UPDATE: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::Update,
    procedure: "usp_update_price",
    params: &[Param::IdList, Param::Price, Param::UserName],
    verb: "updated",
    noun: "price(s)",
};

const INSERT: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::Insert,
    procedure: "usp_insert_price",
    params: &[Param::Sku, Param::Price, Param::UserName],
    verb: "inserted",
    noun: "price record",
};

const DELETE: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::Delete,
    procedure: "usp_delete_price",
    params: &[Param::IdList, Param::UserName],
    verb: "deleted",
    noun: "price(s)",
};

const REACTIVATE: OperationDescriptor = OperationDescriptor {
    kind: OperationKind::Reactivate,
    procedure: "usp_reactivate_price",
    params: &[Param::IdList, Param::UserName],
    verb: "reactivated",
    noun: "price(s)",
};

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Update,
        OperationKind::Insert,
        OperationKind::Delete,
        OperationKind::Reactivate,
    ];

    pub fn descriptor(self) -> &'static OperationDescriptor {
        match self {
            OperationKind::Update => &UPDATE,
            OperationKind::Insert => &INSERT,
            OperationKind::Delete => &DELETE,
            OperationKind::Reactivate => &REACTIVATE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Update => "update",
            OperationKind::Insert => "insert",
            OperationKind::Delete => "delete",
            OperationKind::Reactivate => "reactivate",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied input of one operation.
///
/// All fields arrive as strings; typing happens in the validator. The raw
/// strings are what gets bound to the procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum OperationRequest {
    Update { ids: String, price: String },
    Insert { sku: String, price: String },
    Delete { ids: String },
    Reactivate { ids: String },
}

impl OperationRequest {
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationRequest::Update { .. } => OperationKind::Update,
            OperationRequest::Insert { .. } => OperationKind::Insert,
            OperationRequest::Delete { .. } => OperationKind::Delete,
            OperationRequest::Reactivate { .. } => OperationKind::Reactivate,
        }
    }

    pub fn ids(&self) -> Option<&str> {
        match self {
            OperationRequest::Update { ids, .. }
            | OperationRequest::Delete { ids }
            | OperationRequest::Reactivate { ids } => Some(ids),
            OperationRequest::Insert { .. } => None,
        }
    }

    pub fn sku(&self) -> Option<&str> {
        match self {
            OperationRequest::Insert { sku, .. } => Some(sku),
            _ => None,
        }
    }

    pub fn price(&self) -> Option<&str> {
        match self {
            OperationRequest::Update { price, .. } | OperationRequest::Insert { price, .. } => {
                Some(price)
            }
            _ => None,
        }
    }

    /// Positional parameter values in the order the procedure declares them.
    pub fn bind(&self, user_name: &str) -> Vec<String> {
        self.kind()
            .descriptor()
            .params
            .iter()
            .map(|param| match param {
                Param::IdList => self.ids().unwrap_or_default().to_string(),
                Param::Sku => self.sku().unwrap_or_default().to_string(),
                Param::Price => self.price().unwrap_or_default().to_string(),
                Param::UserName => user_name.to_string(),
            })
            .collect()
    }
}
