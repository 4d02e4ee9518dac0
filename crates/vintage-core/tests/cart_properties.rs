//! Property tests for the cart invariants over random operation sequences.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::collections::HashSet;
use vintage_core::{CartAction, CartState, Money, Product};

const IDS: [&str; 4] = ["1", "2", "3", "4"];
const SIZES: [Option<&str>; 4] = [None, Some(""), Some("S"), Some("M")];

fn product(idx: usize) -> Product {
    Product {
        id: IDS[idx].to_string(),
        name: format!("Product {}", IDS[idx]),
        price_cents: [8900, 2500, 4500, 0][idx],
        image: String::new(),
        category: "clothing".to_string(),
        description: String::new(),
        is_vintage: true,
        created_at: DateTime::<Utc>::default(),
    }
}

fn action_strategy() -> impl Strategy<Value = CartAction> {
    (0u8..4, 0usize..IDS.len(), 0usize..SIZES.len(), -3i64..6).prop_map(
        |(kind, idx, size_idx, quantity)| {
            let size = SIZES[size_idx].map(str::to_string);
            match kind {
                0 => CartAction::AddItem {
                    product: product(idx),
                    size,
                    quantity,
                },
                1 => CartAction::RemoveItem {
                    id: IDS[idx].to_string(),
                    size,
                },
                2 => CartAction::UpdateQuantity {
                    id: IDS[idx].to_string(),
                    size,
                    quantity,
                },
                _ => CartAction::ClearCart,
            }
        },
    )
}

fn run(actions: &[CartAction]) -> CartState {
    actions
        .iter()
        .cloned()
        .fold(CartState::new(), CartState::reduce)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn lines_stay_unique_and_positive(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let cart = run(&actions);

        let mut keys = HashSet::new();
        for line in cart.lines() {
            prop_assert!(line.quantity >= 1);
            prop_assert!(line.selected_size.as_deref() != Some(""));
            prop_assert!(keys.insert((line.id().to_string(), line.selected_size.clone())));
        }
    }

    #[test]
    fn total_is_sum_of_lines(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let cart = run(&actions);
        let expected: Money = cart
            .lines()
            .iter()
            .map(|l| Money::from_cents(l.product.price_cents * l.quantity))
            .sum();
        prop_assert_eq!(cart.total(), expected);
    }

    #[test]
    fn remove_is_idempotent(
        actions in prop::collection::vec(action_strategy(), 0..30),
        idx in 0usize..IDS.len(),
        size_idx in 0usize..SIZES.len(),
    ) {
        let remove = CartAction::RemoveItem {
            id: IDS[idx].to_string(),
            size: SIZES[size_idx].map(str::to_string),
        };
        let once = run(&actions).reduce(remove.clone());
        let twice = once.clone().reduce(remove);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn non_positive_update_equals_remove(
        actions in prop::collection::vec(action_strategy(), 0..30),
        idx in 0usize..IDS.len(),
        size_idx in 0usize..SIZES.len(),
        quantity in -5i64..=0,
    ) {
        let before = run(&actions);
        let size = SIZES[size_idx].map(str::to_string);

        let updated = before.clone().reduce(CartAction::UpdateQuantity {
            id: IDS[idx].to_string(),
            size: size.clone(),
            quantity,
        });
        let removed = before.reduce(CartAction::RemoveItem {
            id: IDS[idx].to_string(),
            size,
        });
        prop_assert_eq!(updated, removed);
    }

    #[test]
    fn clear_always_resets(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let cart = run(&actions).reduce(CartAction::ClearCart);
        prop_assert!(cart.is_empty());
        prop_assert!(cart.total().is_zero());
        prop_assert_eq!(cart, CartState::new());
    }

    #[test]
    fn restored_cart_equals_live_cart(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let cart = run(&actions);
        let json = serde_json::to_string(&cart).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, cart);
    }
}
