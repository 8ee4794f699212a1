use crate::models::Block;

/// Groups whole items greedily. A new group starts when adding the next item
/// would exceed either `max_items` or `max_chars` (summed item characters).
/// An item longer than `max_chars` on its own still forms an intact group.
///
/// Ordered groups carry on the original numbering through their `start`.
pub fn split_list(
    ordered: bool,
    start: u32,
    items: &[String],
    max_items: usize,
    max_chars: usize,
) -> Vec<Block> {
    let max_items = max_items.max(1);
    let mut groups: Vec<(usize, Vec<String>)> = vec![];
    let mut current: Vec<String> = vec![];
    let mut current_chars = 0usize;
    let mut offset = 0usize;

    for (i, item) in items.iter().enumerate() {
        let chars = item.chars().count();
        let overflows = current.len() + 1 > max_items || current_chars + chars > max_chars;
        if !current.is_empty() && overflows {
            groups.push((offset, std::mem::take(&mut current)));
            current_chars = 0;
            offset = i;
        }
        current.push(item.clone());
        current_chars += chars;
    }
    if !current.is_empty() || groups.is_empty() {
        groups.push((offset, current));
    }

    groups
        .into_iter()
        .map(|(offset, items)| Block::List {
            ordered,
            start: if ordered {
                start.saturating_add(offset as u32)
            } else {
                start
            },
            items,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("item {i}")).collect()
    }

    fn sizes(blocks: &[Block]) -> Vec<usize> {
        blocks.iter().map(|b| b.reveal_units().len()).collect()
    }

    #[test]
    fn twenty_items_by_eight() {
        let groups = split_list(false, 1, &items(20), 8, usize::MAX);
        assert_eq!(sizes(&groups), vec![8, 8, 4]);
        let flat: Vec<String> = groups
            .iter()
            .flat_map(|b| b.reveal_units().to_vec())
            .collect();
        assert_eq!(flat, items(20));
    }

    #[test]
    fn char_ceiling_starts_new_group() {
        let list = vec!["aaaa".to_string(), "bbbb".to_string(), "cc".to_string()];
        let groups = split_list(false, 1, &list, 10, 6);
        assert_eq!(sizes(&groups), vec![1, 2]);
    }

    #[test]
    fn oversized_single_item_is_kept_whole() {
        let list = vec!["x".repeat(50), "y".to_string()];
        let groups = split_list(false, 1, &list, 10, 10);
        assert_eq!(sizes(&groups), vec![1, 1]);
        assert_eq!(groups[0].reveal_units()[0], "x".repeat(50));
    }

    #[test]
    fn ordered_groups_continue_numbering() {
        let groups = split_list(true, 3, &items(5), 2, usize::MAX);
        let starts: Vec<u32> = groups
            .iter()
            .map(|b| match b {
                Block::List { start, .. } => *start,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(starts, vec![3, 5, 7]);
    }

    #[test]
    fn list_that_fits_is_one_group() {
        let groups = split_list(false, 1, &items(3), 8, 900);
        assert_eq!(groups, vec![Block::list(false, items(3))]);
    }
}
