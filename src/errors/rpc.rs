// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for blockchain provider operations.

use alloy_primitives::TxHash;

/// Errors that can occur while fetching a call trace from a provider.
///
/// This error type captures the failure modes of the trace-fetch collaborator
/// (see [`TraceSource`](crate::TraceSource)). It includes context about which
/// operation was being performed to aid in debugging.
///
/// # Examples
///
/// ```
/// use alloy_primitives::TxHash;
/// use tracescan::RpcError;
///
/// let error = RpcError::TraceNotFound {
///     tx_hash: TxHash::ZERO,
/// };
/// println!("Error: {}", error);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The node has no trace for the requested transaction.
    ///
    /// This typically means the transaction hash is unknown to the node, or
    /// the node is not running with historical state for that block.
    #[error("No trace found for transaction: {tx_hash}")]
    TraceNotFound {
        /// The transaction hash that couldn't be traced
        tx_hash: TxHash,
    },

    /// Failed to connect to the blockchain or execute an RPC call.
    ///
    /// This is a catch-all for RPC failures that don't fit other categories,
    /// such as network errors, timeouts, provider downtime, or a response
    /// that doesn't match the expected trace shape.
    #[error("Chain connection failed during {operation}")]
    ChainConnectionFailed {
        /// Description of the operation that failed
        operation: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RpcError {
    /// Helper to create a `ChainConnectionFailed` error from any error type.
    pub fn chain_connection_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ChainConnectionFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }
}
