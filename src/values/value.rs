// Raw SQL Values
//
// This module defines the raw column value domain produced by a values
// source, before any materialization into entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw column value as read from a tabular source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Date(String),
    Timestamp(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Render as a SQL literal, for diagnostics and error messages.
    pub fn to_sql_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Float(f) => f.to_string(),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
            SqlValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            SqlValue::Date(s) => format!("DATE '{}'", s),
            SqlValue::Timestamp(s) => format!("TIMESTAMP '{}'", s),
            SqlValue::Blob(b) => format!("X'{}'", hex::encode(b)),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Float(fl) => write!(f, "{}", fl),
            SqlValue::Text(s) => write!(f, "\"{}\"", s),
            SqlValue::Boolean(b) => write!(f, "{}", b),
            SqlValue::Date(s) => write!(f, "DATE '{}'", s),
            SqlValue::Timestamp(s) => write!(f, "TIMESTAMP '{}'", s),
            SqlValue::Blob(b) => write!(f, "BLOB ({} bytes)", b.len()),
        }
    }
}
