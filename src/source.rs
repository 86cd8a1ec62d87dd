//! Trace acquisition from blockchain nodes
//!
//! This module provides a trait-based seam between transfer extraction and
//! trace acquisition. The extraction core consumes an already-decoded
//! [`CallFrame`] tree and has no opinion on transport, authentication, or
//! retry behavior; implement [`TraceSource`] to supply traces from any
//! backend (a debug-enabled node, an archive service, a fixture store).
//!
//! [`DebugTraceSource`] is the production implementation: it issues
//! `debug_traceTransaction` with the `callTracer` tracer against any alloy
//! [`Provider`] and decodes the response.

use alloy_primitives::TxHash;
use alloy_provider::Provider;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::RpcError;
use crate::tracing::spans;
use crate::types::call::CallFrame;

/// Tracer selection passed to `debug_traceTransaction`.
#[derive(Debug, Clone, Copy, Serialize)]
struct CallTracerConfig {
    tracer: &'static str,
}

const CALL_TRACER: CallTracerConfig = CallTracerConfig {
    tracer: "callTracer",
};

/// Source of call traces for transactions.
///
/// The trait is object-safe, allowing runtime pluggability via
/// `Box<dyn TraceSource>`. The contract is binary: either a complete tree
/// matching the `callTracer` shape, or an error. Implementations own any
/// timeout, retry, or cancellation policy; once a tree is returned,
/// extraction runs to completion without further I/O.
#[async_trait]
pub trait TraceSource: Send + Sync {
    /// Fetch the call trace for a transaction.
    async fn fetch_trace(&self, tx_hash: TxHash) -> Result<CallFrame, RpcError>;
}

/// Trace source backed by a node's `debug_traceTransaction` endpoint.
///
/// Requires a node with the debug API enabled (and archive state for
/// historical transactions).
///
/// # Examples
///
/// ```rust,ignore
/// use alloy_provider::ProviderBuilder;
/// use tracescan::{DebugTraceSource, TraceSource};
///
/// let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
/// let source = DebugTraceSource::new(provider.root().clone());
///
/// let trace = source.fetch_trace(tx_hash).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DebugTraceSource<P> {
    provider: P,
}

impl<P> DebugTraceSource<P> {
    /// Creates a new `DebugTraceSource` over the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: Provider> TraceSource for DebugTraceSource<P> {
    async fn fetch_trace(&self, tx_hash: TxHash) -> Result<CallFrame, RpcError> {
        let span = spans::fetch_trace(tx_hash);
        let _guard = span.enter();

        let frame: CallFrame = self
            .provider
            .raw_request("debug_traceTransaction".into(), (tx_hash, CALL_TRACER))
            .await
            .map_err(|e| {
                warn!(error = %e, %tx_hash, "Failed to fetch call trace");
                match e.as_error_resp() {
                    Some(payload) if payload.message.contains("not found") => {
                        RpcError::TraceNotFound { tx_hash }
                    }
                    _ => RpcError::chain_connection_failed("debug_traceTransaction", e),
                }
            })?;

        debug!(
            %tx_hash,
            call_type = ?frame.call_type,
            top_level_calls = frame.calls.len(),
            "Fetched call trace"
        );

        Ok(frame)
    }
}
