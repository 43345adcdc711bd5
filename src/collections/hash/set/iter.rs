use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

use super::HashSet;
use crate::collections::hash::map::{IntoKeys, Keys};

impl<K: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<K, B> {
    type Item = K;

    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

pub struct IntoIter<K>(
    pub(crate) IntoKeys<K, ()>,
);

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<'a, K: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<K, B> {
    type Item = &'a K;

    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

pub struct Iter<'a, K>(
    pub(crate) Keys<'a, K, ()>,
);

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

pub struct Difference<'a, K: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, K>,
    pub(crate) other: &'a HashSet<K, B>,
}

impl<'a, K: Hash + Eq, B: BuildHasher> Iterator for Difference<'a, K, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.has(*item))
    }
}

pub struct SymmetricDifference<'a, K: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Difference<'a, K, B>, Difference<'a, K, B>>,
}

impl<'a, K: Hash + Eq, B: BuildHasher> Iterator for SymmetricDifference<'a, K, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

pub struct Intersection<'a, K: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, K>,
    pub(crate) other: &'a HashSet<K, B>,
}

impl<'a, K: Hash + Eq, B: BuildHasher> Iterator for Intersection<'a, K, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.has(*item))
    }
}

pub struct Union<'a, K: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Iter<'a, K>, Difference<'a, K, B>>,
}

impl<'a, K: Hash + Eq, B: BuildHasher> Iterator for Union<'a, K, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
