use std::iter::FusedIterator;
use std::slice::{Iter, IterMut};

use super::Array;

impl<V> IntoIterator for Array<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            arr: self,
        }
    }
}

impl<'a, V> IntoIterator for &'a Array<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Array<V> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of an [`Array`], from index 0 upwards.
///
/// Taking from the front only moves the head of the underlying Array, so no elements are shifted.
/// Elements that haven't been yielded are dropped along with the iterator.
pub struct IntoIter<V> {
    pub(crate) arr: Array<V>,
}

impl<V> IntoIter<V> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[V] {
        self.arr.slice()
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.arr.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.arr.len(), Some(self.arr.len()))
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.arr.pop().to_optional().into_option()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}
