// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tracescan integration tests
//!
//! Provides a mock trace source and a real geth `callTracer` fixture so the
//! scanner can be exercised without a blockchain connection.

use std::collections::VecDeque;
use std::sync::Mutex;

use alloy_primitives::TxHash;
use async_trait::async_trait;
use tracescan::{CallFrame, RpcError, TraceSource};

/// A `debug_traceTransaction` response body as returned by geth's callTracer:
/// Alice pays 10 wei into a contract, which forwards 5 wei each to Bob and
/// Charlie. Carries the gas/input fields a real node includes.
pub const DEBUG_TRACE_FIXTURE: &str = r#"{
    "from": "0xe78d5a85c8dbb345683b213be22484d0cdf51065",
    "gas": "0x16dde",
    "gasUsed": "0x162cd",
    "to": "0x6b156d8388dede287ee17689da0cc8eeeda1fcbc",
    "input": "0xbfa20351000000000000000000000000000000000000000000000000000000000000000a000000000000000000000000a81482ac1089a80b0b9d6d803b88f67f7ab5fd35000000000000000000000000b750edf608a2774ec8dbc06961e8664ea4a0a2e5",
    "calls": [
        {
            "from": "0x6b156d8388dede287ee17689da0cc8eeeda1fcbc",
            "gas": "0x8fc",
            "gasUsed": "0x0",
            "to": "0xa81482ac1089a80b0b9d6d803b88f67f7ab5fd35",
            "input": "0x",
            "value": "0x5",
            "type": "CALL"
        },
        {
            "from": "0x6b156d8388dede287ee17689da0cc8eeeda1fcbc",
            "gas": "0x8fc",
            "gasUsed": "0x0",
            "to": "0xb750edf608a2774ec8dbc06961e8664ea4a0a2e5",
            "input": "0x",
            "value": "0x5",
            "type": "CALL"
        }
    ],
    "value": "0xa",
    "type": "CALL"
}"#;

/// Decode the fixture into a frame tree.
pub fn fixture_trace() -> CallFrame {
    serde_json::from_str(DEBUG_TRACE_FIXTURE).expect("fixture must decode")
}

/// Mock TraceSource for testing TransferScanner logic
///
/// Returns queued traces in order; once the queue is empty, further fetches
/// fail with `TraceNotFound`, which doubles as the error-path fixture.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockTraceSource::new().with_trace(fixture_trace());
/// let scanner = TransferScanner::new(source);
/// ```
pub struct MockTraceSource {
    traces: Mutex<VecDeque<CallFrame>>,
}

impl MockTraceSource {
    /// Create a new MockTraceSource with no queued traces
    pub fn new() -> Self {
        Self {
            traces: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a trace to be returned by the next fetch
    pub fn with_trace(self, trace: CallFrame) -> Self {
        self.traces.lock().unwrap().push_back(trace);
        self
    }
}

#[async_trait]
impl TraceSource for MockTraceSource {
    async fn fetch_trace(&self, tx_hash: TxHash) -> Result<CallFrame, RpcError> {
        self.traces
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(RpcError::TraceNotFound { tx_hash })
    }
}

/// Install a test subscriber so `RUST_LOG=trace cargo test` shows extraction
/// detail. Safe to call from every test; only the first call wins.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
