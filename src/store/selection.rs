//! Index bookkeeping for reorderable sequences.
//!
//! Moves use insert-before semantics: `to` is a position in `[0, len]`
//! counted before the moved element is taken out.

/// Selection after removing the element at `deleted`.
pub(crate) fn after_delete(selected: usize, deleted: usize) -> usize {
    if deleted == selected {
        0
    } else if deleted < selected {
        selected - 1
    } else {
        selected
    }
}

/// Selection after inserting a copy of `source` right behind it.
pub(crate) fn after_duplicate(selected: usize, source: usize) -> usize {
    if source < selected {
        selected + 1
    } else {
        selected
    }
}

/// Selection after moving the element at `from` to before `to`.
pub(crate) fn after_move(selected: usize, from: usize, to: usize) -> usize {
    if from == selected {
        if to > from {
            to - 1
        } else {
            to
        }
    } else if from < selected && to > selected {
        selected - 1
    } else if from > selected && to <= selected {
        selected + 1
    } else {
        selected
    }
}

/// Out-of-range selections fall back to the first element.
pub(crate) fn clamp(selected: usize, len: usize) -> usize {
    if selected < len {
        selected
    } else {
        0
    }
}

/// Move `items[from]` to before `items[to]`. Returns false when nothing moved.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to > items.len() || to == from || to == from + 1 {
        return false;
    }
    let item = items.remove(from);
    let dest = if to > from { to - 1 } else { to };
    items.insert(dest, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference model: move, then find where the selected element went.
    fn tracked_move(len: usize, selected: usize, from: usize, to: usize) -> usize {
        let mut items: Vec<usize> = (0..len).collect();
        move_item(&mut items, from, to);
        items.iter().position(|&i| i == selected).unwrap()
    }

    #[test]
    fn move_item_forward_and_back() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut items, 0, 3));
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        assert!(move_item(&mut items, 3, 0));
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);

        assert!(move_item(&mut items, 1, 4));
        assert_eq!(items, vec!['d', 'c', 'a', 'b']);
    }

    #[test]
    fn move_item_noops() {
        let mut items = vec![1, 2, 3];
        assert!(!move_item(&mut items, 1, 1));
        assert!(!move_item(&mut items, 1, 2));
        assert!(!move_item(&mut items, 3, 0));
        assert!(!move_item(&mut items, 0, 4));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn after_move_tracks_selected_element_exhaustively() {
        for len in 1..6 {
            for selected in 0..len {
                for from in 0..len {
                    for to in 0..=len {
                        assert_eq!(
                            after_move(selected, from, to),
                            tracked_move(len, selected, from, to),
                            "len={len} selected={selected} from={from} to={to}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn delete_adjusts_selection() {
        assert_eq!(after_delete(2, 2), 0);
        assert_eq!(after_delete(2, 0), 1);
        assert_eq!(after_delete(2, 3), 2);
    }

    #[test]
    fn duplicate_adjusts_selection() {
        assert_eq!(after_duplicate(2, 0), 3);
        assert_eq!(after_duplicate(2, 2), 2);
        assert_eq!(after_duplicate(2, 4), 2);
    }

    #[test]
    fn clamp_resets_out_of_range() {
        assert_eq!(clamp(1, 3), 1);
        assert_eq!(clamp(3, 3), 0);
    }
}
