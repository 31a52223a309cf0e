use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::Dataset;

/// Dataset backed by a first-in-first-out queue.
///
/// Items are loaded once when the dataset is built and handed out destructively: every call to
/// [get](Dataset::get) pops the head of the queue, whatever index is requested. Nothing is ever
/// pushed back, so once drained the dataset stays empty.
#[derive(Debug)]
pub struct QueueDataset<I> {
    items: Mutex<VecDeque<I>>,
}

impl<I> QueueDataset<I> {
    /// Creates a new queue dataset holding the given items in order.
    pub fn from_items(items: Vec<I>) -> Self {
        Self {
            items: Mutex::new(VecDeque::from(items)),
        }
    }

    /// Creates an empty queue dataset.
    pub fn empty() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    /// Removes and returns the head of the queue.
    pub fn pop(&self) -> Option<I> {
        self.lock().pop_front()
    }

    /// Number of items left in the queue.
    pub fn remaining(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock cannot leave the queue half-updated.
    fn lock(&self) -> MutexGuard<'_, VecDeque<I>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<I> FromIterator<I> for QueueDataset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            items: Mutex::new(iter.into_iter().collect()),
        }
    }
}

impl<I> Dataset<I> for QueueDataset<I>
where
    I: Send,
{
    fn get(&self, _index: usize) -> Option<I> {
        let item = self.pop();
        log::trace!("Popped item from queue, {} left", self.remaining());
        item
    }

    fn len(&self) -> usize {
        self.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn get_ignores_index() {
        let dataset = QueueDataset::from_items(vec!['a', 'b', 'c']);

        assert_eq!(dataset.get(999), Some('a'));
        assert_eq!(dataset.get(0), Some('b'));
        assert_eq!(dataset.get(1), Some('c'));
        assert_eq!(dataset.get(0), None);
    }

    #[test]
    fn len_counts_remaining_items() {
        let dataset: QueueDataset<u8> = (0..3).collect();
        assert_eq!(dataset.len(), 3);

        dataset.get(0);
        assert_eq!(dataset.len(), 2);

        dataset.iter().for_each(drop);
        assert_eq!(dataset.len(), 0);
        assert!(dataset.is_empty());
    }

    #[test]
    fn empty_dataset_has_nothing_to_give() {
        let dataset = QueueDataset::<String>::empty();

        assert!(dataset.is_empty());
        assert_eq!(dataset.get(0), None);
        assert_eq!(dataset.iter().count(), 0);
    }

    #[test]
    fn each_item_is_handed_out_once_across_threads() {
        let dataset = Arc::new((0..64).collect::<QueueDataset<usize>>());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dataset = Arc::clone(&dataset);
                thread::spawn(move || {
                    let mut taken = Vec::new();
                    while let Some(item) = dataset.pop() {
                        taken.push(item);
                    }
                    taken
                })
            })
            .collect();

        let mut all: Vec<usize> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        all.sort();

        assert_eq!(all, (0..64).collect::<Vec<_>>());
        assert_eq!(dataset.remaining(), 0);
    }
}
