//! Arrangement of priced picker entries.
//!
//! The API/model picker lets the user toggle price sorting and provider
//! grouping independently; this module owns the ordering rules so the UI
//! just renders the returned sequence.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One selectable entry in the API/model picker.
///
/// Supplied wholesale by the caller from the completion-API listing; never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    /// Stable identifier submitted on selection.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Price per unit, used for sorting.
    pub price: f64,
    /// Free-form group field; the leading token is the provider.
    pub group: String,
    pub desc: Option<String>,
    pub hint: Option<String>,
}

/// Grouping key: the leading whitespace-delimited token of the group field.
pub fn provider(group: &str) -> &str {
    group.split_whitespace().next().unwrap_or("")
}

/// Order picker entries without mutating the input.
///
/// Grouped output keeps providers in first-seen order and concatenates the
/// partitions; sorting is stable, so equal prices keep their original
/// relative order.
pub fn arrange(items: &[PricedItem], sorted: bool, grouped: bool) -> Vec<PricedItem> {
    if grouped {
        let mut provider_order: Vec<String> = Vec::new();
        let mut buckets: HashMap<String, Vec<PricedItem>> = HashMap::new();

        for item in items {
            let key = provider(&item.group);
            if !buckets.contains_key(key) {
                provider_order.push(key.to_string());
            }
            buckets.entry(key.to_string()).or_default().push(item.clone());
        }

        let mut arranged = Vec::with_capacity(items.len());
        for key in &provider_order {
            if let Some(mut bucket) = buckets.remove(key) {
                if sorted {
                    sort_by_price(&mut bucket);
                }
                arranged.extend(bucket);
            }
        }
        arranged
    } else if sorted {
        let mut arranged = items.to_vec();
        sort_by_price(&mut arranged);
        arranged
    } else {
        items.to_vec()
    }
}

fn sort_by_price(items: &mut [PricedItem]) {
    // Stable sort; NaN prices compare equal and keep their position.
    items.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: &str, price: f64, group: &str) -> PricedItem {
        PricedItem {
            value: value.to_string(),
            label: value.to_string(),
            price,
            group: group.to_string(),
            desc: None,
            hint: None,
        }
    }

    fn values(items: &[PricedItem]) -> Vec<&str> {
        items.iter().map(|i| i.value.as_str()).collect()
    }

    #[test]
    fn provider_is_first_whitespace_token() {
        assert_eq!(provider("openai gpt-4o tier"), "openai");
        assert_eq!(provider("local"), "local");
        assert_eq!(provider("  mistral  large"), "mistral");
        assert_eq!(provider(""), "");
    }

    #[test]
    fn unarranged_input_keeps_original_order() {
        let items = vec![item("b", 2.0, "x"), item("a", 1.0, "y")];
        assert_eq!(values(&arrange(&items, false, false)), vec!["b", "a"]);
    }

    #[test]
    fn sorted_output_is_non_decreasing_by_price() {
        let items = vec![
            item("c", 3.0, "x"),
            item("a", 1.0, "y"),
            item("b", 2.0, "x"),
        ];
        assert_eq!(values(&arrange(&items, true, false)), vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_prices_keep_original_relative_order() {
        let items = vec![
            item("first", 1.0, "x"),
            item("second", 1.0, "y"),
            item("cheap", 0.5, "z"),
            item("third", 1.0, "x"),
        ];
        assert_eq!(
            values(&arrange(&items, true, false)),
            vec!["cheap", "first", "second", "third"]
        );
    }

    #[test]
    fn grouping_preserves_first_seen_provider_order() {
        let items = vec![
            item("m1", 3.0, "openai gpt"),
            item("m2", 1.0, "mistral small"),
            item("m3", 2.0, "openai gpt"),
            item("m4", 0.5, "local llama"),
        ];
        assert_eq!(
            values(&arrange(&items, false, true)),
            vec!["m1", "m3", "m2", "m4"]
        );
    }

    #[test]
    fn grouped_and_sorted_orders_within_each_partition() {
        let items = vec![
            item("m1", 3.0, "openai gpt"),
            item("m2", 1.0, "mistral small"),
            item("m3", 2.0, "openai gpt"),
            item("m4", 4.0, "mistral large"),
        ];
        assert_eq!(
            values(&arrange(&items, true, true)),
            vec!["m3", "m1", "m2", "m4"]
        );
    }

    #[test]
    fn input_is_never_mutated() {
        let items = vec![item("b", 2.0, "x"), item("a", 1.0, "x")];
        let before = items.clone();
        let _ = arrange(&items, true, true);
        assert_eq!(items, before);
    }

    #[test]
    fn nan_prices_compare_equal_and_keep_position() {
        let items = vec![
            item("n1", f64::NAN, "x"),
            item("a", 1.0, "x"),
            item("n2", f64::NAN, "x"),
        ];
        let arranged = arrange(&items, true, false);
        assert_eq!(arranged.len(), 3);
        // NaN neither reorders past its neighbors nor panics.
        assert_eq!(arranged[0].value, "n1");
    }
}
