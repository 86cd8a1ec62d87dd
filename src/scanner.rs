//! Internal transfer scanning for transactions
//!
//! This module ties trace acquisition and transfer extraction together:
//! given a transaction hash, fetch its call trace and reduce it to the
//! ordered list of effective value movements.
//!
//! # Examples
//!
//! ```rust,ignore
//! use alloy_provider::ProviderBuilder;
//! use tracescan::{DebugTraceSource, TransferScanner};
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let scanner = TransferScanner::new(DebugTraceSource::new(provider.root().clone()));
//!
//! let transfers = scanner.internal_transfers(tx_hash).await?;
//! for transfer in &transfers {
//!     println!("{transfer}");
//! }
//! ```

use alloy_primitives::TxHash;
use futures::future::try_join_all;
use tracing::info;

use crate::errors::TransferExtractionError;
use crate::extract::extract_transfers;
use crate::source::TraceSource;
use crate::tracing::spans;
use crate::types::transfer::Transfer;

/// Scanner for internal value transfers within transactions.
///
/// Wraps any [`TraceSource`] and applies the extraction rules from
/// [`extract_transfers`](crate::extract_transfers) to each fetched trace.
/// The scanner holds no mutable state and is safe to share across tasks.
pub struct TransferScanner<S> {
    source: S,
}

impl<S: TraceSource> TransferScanner<S> {
    /// Creates a new `TransferScanner` over the given trace source.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use tracescan::{DebugTraceSource, TransferScanner};
    ///
    /// let scanner = TransferScanner::new(DebugTraceSource::new(provider));
    /// ```
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Extract all internal transfers made during a transaction's execution.
    ///
    /// Fetches the transaction's call trace and reduces it to the ordered
    /// list of effective value movements. Transfers appear in execution
    /// post-order: for each call, the transfers of its nested calls come
    /// strictly before the call's own transfer. Reverted subtrees contribute
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TransferExtractionError::Rpc`] when the trace could not be
    /// fetched, and a decode variant when a value or address field in the
    /// trace could not be parsed. No partial results are returned on error.
    pub async fn internal_transfers(
        &self,
        tx_hash: TxHash,
    ) -> Result<Vec<Transfer>, TransferExtractionError> {
        let span = spans::internal_transfers(tx_hash);
        let _guard = span.enter();

        let trace = self.source.fetch_trace(tx_hash).await?;
        let transfers = extract_transfers(&trace)?;

        info!(
            %tx_hash,
            transfer_count = transfers.len(),
            "Extracted internal transfers for transaction"
        );

        Ok(transfers)
    }

    /// Extract internal transfers for several transactions.
    ///
    /// Fetches traces concurrently; the returned vector preserves the order
    /// of `tx_hashes`, one transfer list per input hash. The first failure
    /// aborts the whole batch.
    pub async fn internal_transfers_for_many(
        &self,
        tx_hashes: &[TxHash],
    ) -> Result<Vec<Vec<Transfer>>, TransferExtractionError> {
        try_join_all(
            tx_hashes
                .iter()
                .map(|tx_hash| self.internal_transfers(*tx_hash)),
        )
        .await
    }
}
