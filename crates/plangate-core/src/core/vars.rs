// crates/plangate-core/src/core/vars.rs
// ============================================================================
// Module: Plan Gate Variables
// Description: The immutable parameter set handed to the provisioning tool.
// Purpose: Model tool input variables and their command-line encoding.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`VarMap`] is the scenario parameter set: an ordered, immutable mapping
//! from variable name to [`VarValue`]. The harness does not interpret the
//! values; the tool's own variable schema is the authority on required and
//! optional status. Missing or malformed variables therefore surface as
//! tool-level failures, never as harness guesses.
//!
//! List values encode as JSON array literals, which the tool accepts for
//! list-typed variables on the command line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Variable Values
// ============================================================================

/// A single variable value passed to the provisioning tool.
///
/// # Invariants
/// - Values are opaque to the harness; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    /// A string value, passed through verbatim.
    Str(String),
    /// A sequence of strings, encoded as a JSON array literal.
    List(Vec<String>),
}

impl VarValue {
    /// Creates a string value.
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates a list value from string-like items.
    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Renders the value in the form the tool accepts on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`VarEncodeError`] when a list value cannot be encoded as a
    /// JSON array literal.
    pub fn render(&self) -> Result<String, VarEncodeError> {
        match self {
            Self::Str(value) => Ok(value.clone()),
            Self::List(items) => {
                serde_json::to_string(items).map_err(|source| VarEncodeError {
                    message: source.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

// ============================================================================
// SECTION: Variable Maps
// ============================================================================

/// Variable encoding failures.
///
/// # Invariants
/// - Raised only for values the JSON encoder rejects; plain string and
///   string-list values encode unconditionally in practice.
#[derive(Debug, Error)]
#[error("variable encoding failed: {message}")]
pub struct VarEncodeError {
    /// Human-readable encoder failure.
    message: String,
}

/// The scenario parameter set: an ordered mapping of variable names to
/// values.
///
/// # Invariants
/// - Iteration order is the lexical order of variable names, keeping tool
///   invocations deterministic.
/// - The map is immutable once handed to driver options; scenarios never
///   share mutable variable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarMap(BTreeMap<String, VarValue>);

impl VarMap {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a variable, replacing any prior value under the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: VarValue) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Returns the value for a variable name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.0.get(name)
    }

    /// Returns true when the set carries no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of variables in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates variables in lexical name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &VarValue)> {
        self.0.iter()
    }

    /// Renders the set as repeated `-var name=value` argument pairs.
    ///
    /// # Errors
    ///
    /// Returns [`VarEncodeError`] when any value fails to encode.
    pub fn to_var_args(&self) -> Result<Vec<String>, VarEncodeError> {
        let mut args = Vec::with_capacity(self.0.len() * 2);
        for (name, value) in &self.0 {
            args.push("-var".to_string());
            args.push(format!("{name}={}", value.render()?));
        }
        Ok(args)
    }
}

impl FromIterator<(String, VarValue)> for VarMap {
    fn from_iter<I: IntoIterator<Item = (String, VarValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
