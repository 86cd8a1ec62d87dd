// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for transfer extraction
//!
//! These tests use proptest to validate the extraction invariants over
//! randomly generated call trees: the transfer count matches the number of
//! qualifying frames, emission is post-order, reversion is inherited, and
//! every emitted value is strictly positive.

use proptest::prelude::*;
use tracescan::{extract_transfers, CallFrame, CallType};

const FROM: &str = "0x1111111111111111111111111111111111111111";
const TO: &str = "0x2222222222222222222222222222222222222222";

fn make_frame(call_type: CallType, value: u64, reverted: bool, calls: Vec<CallFrame>) -> CallFrame {
    CallFrame {
        from: FROM.to_string(),
        to: TO.to_string(),
        calls,
        value: format!("0x{value:x}"),
        call_type,
        error: reverted.then(|| "execution reverted".to_string()),
    }
}

// Helper to generate arbitrary call-type discriminators, biased toward CALL
// so trees actually contain transfers.
fn arb_call_type() -> impl Strategy<Value = CallType> {
    prop_oneof![
        4 => Just(CallType::Call),
        1 => Just(CallType::DelegateCall),
        1 => Just(CallType::StaticCall),
        1 => Just(CallType::Create),
        1 => Just(CallType::SelfDestruct),
        1 => Just(CallType::Other),
    ]
}

// Helper to generate arbitrary call trees up to depth 4.
fn arb_frame() -> impl Strategy<Value = CallFrame> {
    let leaf = (arb_call_type(), 0u64..=50, prop::bool::weighted(0.2))
        .prop_map(|(call_type, value, reverted)| make_frame(call_type, value, reverted, vec![]));

    leaf.prop_recursive(4, 64, 4, |inner| {
        (
            arb_call_type(),
            0u64..=50,
            prop::bool::weighted(0.2),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(call_type, value, reverted, calls)| {
                make_frame(call_type, value, reverted, calls)
            })
    })
}

/// Independent reference walk: post-order values of qualifying frames
/// outside any reverted subtree.
fn reference_values(frame: &CallFrame) -> Vec<u64> {
    if frame.is_reverted() {
        return Vec::new();
    }

    let mut values: Vec<u64> = frame.calls.iter().flat_map(reference_values).collect();

    let own = u64::from_str_radix(frame.value.trim_start_matches("0x"), 16).unwrap_or(0);
    if frame.call_type == CallType::Call && own > 0 {
        values.push(own);
    }

    values
}

proptest! {
    /// Property: the number of transfers equals the number of CALL frames
    /// with positive value outside any reverted subtree.
    #[test]
    fn prop_transfer_count_matches_reference(frame in arb_frame()) {
        let transfers = extract_transfers(&frame).unwrap();
        prop_assert_eq!(transfers.len(), reference_values(&frame).len());
    }

    /// Property: transfers are emitted in post-order over the surviving
    /// subtree, value for value.
    #[test]
    fn prop_emission_is_post_order(frame in arb_frame()) {
        let values: Vec<u64> = extract_transfers(&frame)
            .unwrap()
            .iter()
            .map(|t| t.value.to::<u64>())
            .collect();

        prop_assert_eq!(values, reference_values(&frame));
    }

    /// Property: every emitted transfer has a strictly positive value.
    #[test]
    fn prop_all_transfers_positive(frame in arb_frame()) {
        for transfer in extract_transfers(&frame).unwrap() {
            prop_assert!(!transfer.value.is_zero());
        }
    }

    /// Property: wrapping any tree in a reverted root discards everything,
    /// regardless of how valid the tree looks on its own.
    #[test]
    fn prop_reverted_root_discards_subtree(frame in arb_frame()) {
        let root = make_frame(CallType::Call, 7, true, vec![frame]);
        prop_assert!(extract_transfers(&root).unwrap().is_empty());
    }

    /// Property: prepending sibling subtrees never changes the transfers
    /// extracted from an existing subtree, only their position.
    #[test]
    fn prop_siblings_are_independent(left in arb_frame(), right in arb_frame()) {
        let root = make_frame(CallType::Other, 0, false, vec![left.clone(), right.clone()]);
        let combined: Vec<u64> = extract_transfers(&root)
            .unwrap()
            .iter()
            .map(|t| t.value.to::<u64>())
            .collect();

        let mut expected = reference_values(&left);
        expected.extend(reference_values(&right));
        prop_assert_eq!(combined, expected);
    }
}
