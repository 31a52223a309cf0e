use crate::Dataset;
use std::iter::Iterator;

/// Dataset iterator.
///
/// Items are requested with increasing indices until the dataset returns `None`. For consuming
/// datasets the iterator drains them, so a second pass over the same dataset yields nothing.
pub struct DatasetIterator<'a, I> {
    current: usize,
    dataset: &'a dyn Dataset<I>,
}

impl<'a, I> DatasetIterator<'a, I> {
    /// Creates a new dataset iterator.
    pub fn new<D>(dataset: &'a D) -> Self
    where
        D: Dataset<I>,
    {
        DatasetIterator {
            current: 0,
            dataset,
        }
    }
}

impl<I> Iterator for DatasetIterator<'_, I> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        let item = self.dataset.get(self.current);
        self.current += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.dataset.len()))
    }
}
