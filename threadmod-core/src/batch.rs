//! Collects per-item failures of actions that tolerate them.
//!
//! Instead of aborting at the first rejected item all items are
//! processed and every rejection is reported together.

/// The order in which the items are processed.
///
/// This must match the order in which the executor of the action
/// mutates the items, e.g. descending ids for deletions that would
/// otherwise shift the ids of items not processed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome<S, F> {
    Accepted(S),
    /// Neither accepted nor reported.
    Skipped,
    Rejected(F),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate<S, F> {
    pub accepted: Vec<S>,
    pub rejected: Vec<F>,
    pub skipped: usize,
}

impl<S, F> Default for Aggregate<S, F> {
    fn default() -> Self {
        Self {
            accepted: vec![],
            rejected: vec![],
            skipped: 0,
        }
    }
}

impl<S, F> Aggregate<S, F> {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Applies `op` to every unique item in the given order.
///
/// An `Err` returned by `op` is not a rejection of the item
/// but a failure of the whole batch and aborts immediately.
pub fn aggregate<T, S, F, E>(
    items: impl IntoIterator<Item = T>,
    order: ProcessingOrder,
    mut op: impl FnMut(T) -> Result<ItemOutcome<S, F>, E>,
) -> Result<Aggregate<S, F>, E>
where
    T: Ord,
{
    let mut items: Vec<_> = items.into_iter().collect();
    items.sort_unstable();
    items.dedup();
    if order == ProcessingOrder::Descending {
        items.reverse();
    }
    let mut result = Aggregate::default();
    for item in items {
        match op(item)? {
            ItemOutcome::Accepted(s) => result.accepted.push(s),
            ItemOutcome::Skipped => result.skipped += 1,
            ItemOutcome::Rejected(f) => result.rejected.push(f),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn classify(x: u32) -> Result<ItemOutcome<u32, String>, Infallible> {
        Ok(match x % 3 {
            0 => ItemOutcome::Accepted(x),
            1 => ItemOutcome::Rejected(format!("rejected {x}")),
            _ => ItemOutcome::Skipped,
        })
    }

    #[test]
    fn process_in_descending_order() {
        let mut visited = vec![];
        let result = aggregate([3, 9, 6, 3], ProcessingOrder::Descending, |x| {
            visited.push(x);
            classify(x)
        })
        .unwrap();
        assert_eq!(visited, vec![9, 6, 3]);
        assert_eq!(result.accepted, vec![9, 6, 3]);
        assert!(!result.has_rejections());
    }

    #[test]
    fn collect_all_rejections() {
        let result = aggregate(1..=7, ProcessingOrder::Ascending, classify).unwrap();
        assert_eq!(result.accepted, vec![3, 6]);
        assert_eq!(
            result.rejected,
            vec!["rejected 1", "rejected 4", "rejected 7"]
        );
        assert_eq!(result.skipped, 2);
    }

    #[test]
    fn abort_on_error() {
        let mut visited = 0;
        let result: Result<Aggregate<u32, ()>, &str> =
            aggregate([1, 2, 3], ProcessingOrder::Ascending, |x| {
                visited += 1;
                if x == 2 {
                    Err("broken")
                } else {
                    Ok(ItemOutcome::Accepted(x))
                }
            });
        assert_eq!(result, Err("broken"));
        assert_eq!(visited, 2);
    }
}
