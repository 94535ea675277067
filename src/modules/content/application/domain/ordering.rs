use crate::modules::content::application::domain::entities::CollectionEntity;

/// Display order: ascending `order`, ties keep their array position.
pub fn sort_by_order<T: CollectionEntity>(items: &mut [T]) {
    // `sort_by_key` is stable.
    items.sort_by_key(|item| item.order());
}

/// Assigns each entity the index of its id in `ids`.
///
/// Entities missing from `ids` keep their current order and ids that match
/// nothing are ignored. A repeated id counts at its first position.
pub fn apply_order<T: CollectionEntity>(items: &mut [T], ids: &[String]) {
    for item in items.iter_mut() {
        if let Some(position) = ids.iter().position(|id| id == item.id()) {
            item.set_order(u32::try_from(position).unwrap_or(u32::MAX));
        }
    }
}

/// Moves `id` to `position` within `ids`, clamping past-the-end positions.
///
/// Returns `None` when `id` is not in the sequence.
pub fn move_id(ids: &[String], id: &str, position: usize) -> Option<Vec<String>> {
    let from = ids.iter().position(|candidate| candidate == id)?;

    let mut moved = ids.to_vec();
    let item = moved.remove(from);
    let to = position.min(moved.len());
    moved.insert(to, item);

    Some(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{item, ids_of, TestItem};

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reorder_assigns_positions() {
        let mut items = vec![item("a", 0), item("b", 1), item("c", 2)];

        apply_order(&mut items, &ids(&["c", "a", "b"]));

        let orders: Vec<(String, u32)> =
            items.iter().map(|i| (i.id.clone(), i.order)).collect();
        assert_eq!(
            orders,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 2),
                ("c".to_string(), 0)
            ]
        );

        sort_by_order(&mut items);
        assert_eq!(ids_of(&items), ids(&["c", "a", "b"]));
    }

    #[test]
    fn reorder_with_partial_input_keeps_missing_orders() {
        let mut items = vec![item("a", 0), item("b", 1), item("c", 2)];

        apply_order(&mut items, &ids(&["b"]));

        assert_eq!(items[0].order, 0);
        assert_eq!(items[1].order, 0);
        assert_eq!(items[2].order, 2);
    }

    #[test]
    fn reorder_ignores_unknown_ids() {
        let mut items = vec![item("a", 5)];

        apply_order(&mut items, &ids(&["zzz", "a", "yyy"]));

        assert_eq!(items[0].order, 1);
    }

    #[test]
    fn duplicate_ids_use_first_position() {
        let mut items = vec![item("a", 9)];

        apply_order(&mut items, &ids(&["a", "a"]));

        assert_eq!(items[0].order, 0);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut items: Vec<TestItem> = vec![item("x", 1), item("y", 0), item("z", 1), item("w", 0)];

        sort_by_order(&mut items);

        assert_eq!(ids_of(&items), ids(&["y", "w", "x", "z"]));
    }

    #[test]
    fn move_id_forward_backward_and_clamped() {
        let seq = ids(&["a", "b", "c", "d"]);

        assert_eq!(move_id(&seq, "a", 2).unwrap(), ids(&["b", "c", "a", "d"]));
        assert_eq!(move_id(&seq, "d", 0).unwrap(), ids(&["d", "a", "b", "c"]));
        assert_eq!(move_id(&seq, "b", 99).unwrap(), ids(&["a", "c", "d", "b"]));
        assert_eq!(move_id(&seq, "c", 2).unwrap(), seq);
    }

    #[test]
    fn move_id_unknown_is_none() {
        assert!(move_id(&ids(&["a"]), "b", 0).is_none());
    }
}
