// crates/plangate-core/src/core/retry.rs
// ============================================================================
// Module: Plan Gate Retry Policy
// Description: Pass-through retry configuration for tool invocations.
// Purpose: Retry transient tool failures without interpreting them.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The harness itself never retries; the only retry hook is this policy,
//! passed through to tool invocations. An invocation that fails with output
//! matching one of the retryable messages is re-run after the backoff, up to
//! the attempt budget. The message list is opaque to the harness: matching
//! is plain substring containment against the combined tool output, and the
//! semantics of each message belong to the tool, not to Plan Gate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Transient failure messages retried by default.
///
/// These are well-known wire and plugin hiccups the tool surfaces for
/// conditions that resolve on their own; none of them indicate a broken
/// configuration.
const DEFAULT_RETRYABLE_MESSAGES: &[&str] = &[
    "RequestError: send request failed",
    "connection reset by peer",
    "TLS handshake timeout",
    "Client.Timeout exceeded while awaiting headers",
    "timeout while waiting for plugin to start",
    "timed out waiting for server handshake",
    "Error installing provider",
    "Failed to query available provider packages",
    "could not query provider registry",
    "Error configuring the backend",
];

/// Default attempt budget when retries are enabled.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default pause between attempts.
const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);

// ============================================================================
// SECTION: Retry Policy
// ============================================================================

/// Retry configuration passed through to tool invocations.
///
/// # Invariants
/// - `max_attempts` counts total attempts, not re-runs; it is always >= 1.
/// - Message matching is substring containment; the list is never
///   interpreted beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts allowed for one invocation.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub backoff: Duration,
    /// Output substrings that mark a failure as transient.
    pub retryable_messages: Vec<String>,
}

impl RetryPolicy {
    /// Creates a policy with an explicit attempt budget and backoff, and no
    /// retryable messages.
    #[must_use]
    pub const fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            backoff,
            retryable_messages: Vec::new(),
        }
    }

    /// Creates the stock policy carrying the well-known transient failure
    /// messages.
    #[must_use]
    pub fn default_retryable_errors() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
            retryable_messages: DEFAULT_RETRYABLE_MESSAGES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Appends a retryable message substring.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.retryable_messages.push(message.into());
        self
    }

    /// Returns true when the combined tool output marks the failure as
    /// transient.
    #[must_use]
    pub fn is_retryable(&self, output: &str) -> bool {
        self.retryable_messages.iter().any(|message| output.contains(message))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
