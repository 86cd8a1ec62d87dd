// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for an extracted value transfer

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A single native-value movement between two accounts.
///
/// Transfers are produced by [`extract_transfers`](crate::extract_transfers)
/// and owned by its caller. The `value` is always strictly positive: frames
/// carrying zero value never contribute a transfer.
///
/// A transfer has no identity beyond its position in the output sequence,
/// which reflects execution order (post-order over the surviving call tree).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Account the value left
    pub from: Address,
    /// Account the value arrived at
    pub to: Address,
    /// Amount moved, in wei
    pub value: U256,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {} wei", self.from, self.to, self.value)
    }
}
