// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Data model for call traces and extracted transfers.
//!
//! - [`call`]: the decoded `callTracer` frame tree (extraction input)
//! - [`transfer`]: the strongly-typed transfer record (extraction output)

pub mod call;
pub mod transfer;

// Note: Public types are re-exported from lib.rs, not here
