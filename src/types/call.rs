// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Call trace data model
//!
//! These types mirror the JSON produced by geth's `callTracer` for
//! `debug_traceTransaction`: one frame per contract call, with the calls it
//! made during execution as ordered children.

use serde::Deserialize;

/// The call mechanism of a single trace frame.
///
/// Only [`CallType::Call`] moves native value between the `from` and `to`
/// parties. Everything else (code delegation, read-only calls, contract
/// creation) is traced with the same frame shape but never represents a
/// transfer in this model, even when a `value` field is present.
///
/// Discriminators not listed here deserialize to [`CallType::Other`] rather
/// than failing: new tracer output must not break decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CallType {
    /// Plain message call; the only frame type that transfers value
    Call,
    /// Legacy CALLCODE
    CallCode,
    /// Executes callee code in the caller's context
    DelegateCall,
    /// Read-only call; cannot carry value
    StaticCall,
    /// Contract creation
    Create,
    /// Contract creation with deterministic address
    Create2,
    /// Account self-destruction
    SelfDestruct,
    /// Any discriminator this crate does not know about
    #[serde(other)]
    Other,
}

/// A single frame of a transaction call trace.
///
/// A frame and its [`calls`](CallFrame::calls) form the call tree for one
/// transaction. Frames are read-only inputs: they are decoded once from the
/// tracer response and handed to
/// [`extract_transfers`](crate::extract_transfers).
///
/// Account identifiers and the value amount are kept as the hex strings the
/// tracer produced; decoding happens during extraction, and only for frames
/// that actually contribute a transfer.
///
/// Fields this crate does not use (gas, input, output, logs, ...) are ignored
/// during deserialization.
///
/// # Examples
///
/// ```
/// use tracescan::CallFrame;
///
/// let frame: CallFrame = serde_json::from_str(
///     r#"{
///         "from": "0xe78d5a85c8dbb345683b213be22484d0cdf51065",
///         "to": "0x6b156d8388dede287ee17689da0cc8eeeda1fcbc",
///         "value": "0xa",
///         "type": "CALL"
///     }"#,
/// )?;
/// assert!(!frame.is_reverted());
/// assert!(frame.calls.is_empty());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CallFrame {
    /// Caller account, hex-encoded
    #[serde(default)]
    pub from: String,
    /// Callee account, hex-encoded
    #[serde(default)]
    pub to: String,
    /// Calls made during execution of this frame, in execution order
    #[serde(default)]
    pub calls: Vec<CallFrame>,
    /// Value carried by the call, as a hex quantity. Absent on frame types
    /// that cannot carry value (e.g. STATICCALL).
    #[serde(default)]
    pub value: String,
    /// Call mechanism discriminator
    #[serde(rename = "type")]
    pub call_type: CallType,
    /// Diagnostic string when the call reverted; absent or empty on success
    #[serde(default)]
    pub error: Option<String>,
}

impl CallFrame {
    /// Whether this frame reverted.
    ///
    /// A reverted frame undoes all state changes made by the call and by
    /// everything it invoked, so its entire subtree produces no effective
    /// transfers.
    pub fn is_reverted(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}
