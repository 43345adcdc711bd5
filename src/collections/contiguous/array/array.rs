use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Bound, Deref, DerefMut, RangeBounds};
use std::ptr;
use std::slice;

use super::{ArrayCursor, IndexCursor};
use crate::collections::contiguous::Buffer;
use crate::collections::traits::{Container, Iterable, Map, Stack};
use crate::outcome::{self, EmptyAccess, IndexOutOfBounds};
use crate::util::fmt::{DebugList, DebugRaw};
use crate::util::option::OptionExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, indexed from `0` to `len - 1` without gaps.
///
/// An Array is a stack (see [`push`](Array::push) and [`pop`](Array::pop)) as well as a
/// [`Map`] keyed by index. Access that can fail returns an [`outcome::Result`] rather than
/// panicking, and mutation that can't be applied returns `false`.
///
/// Dropping the first element only advances the start of the Array inside its allocation, the
/// freed slots are reclaimed the next time the Array runs out of room at the end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `put` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `drop` / `remove` | `O(1)` for `i = 0` or `i = n - 1`, otherwise `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `compact` | `O(n)` |
/// | `push_array` | `O(n+m)` |
///
/// \* If the Array doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Array has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Array<V> {
    pub(crate) buf: Buffer<MaybeUninit<V>>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<V> Array<V> {
    /// Creates a new Array with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn new() -> Array<V> {
        Array {
            buf: Buffer::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates a new Array with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::contiguous::Array;
    /// let mut arr: Array<u8> = Array::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.push_all([1, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Array<V> {
        Array {
            buf: Buffer::new_uninit(cap),
            head: 0,
            len: 0,
        }
    }

    /// Returns the length of the Array.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Array. Unlike [`Vec`], the capacity is exactly the value
    /// requested by the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns true if `index` refers to an element, that is if `index < len`.
    pub const fn has(&self, index: usize) -> bool {
        index < self.len
    }

    /// Push the provided value onto the end of the Array, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Array would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::contiguous::Array;
    /// let mut arr = Array::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(arr.slice(), &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: V) {
        if self.head + self.len == self.cap() {
            self.make_room();
        }
        // SAFETY: There is now room for at least one more value after the last one.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Array, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Array has room for the value after its current
    /// last element, using methods like [`reserve`](Array::reserve) or
    /// [`with_cap`](Array::with_cap) to do so. Using this method on an Array without enough
    /// capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: V) {
        // SAFETY: It is up to the caller to ensure that head + len is within the Buffer.
        unsafe { self.buf.ptr.add(self.head + self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pushes every value produced by `values` onto the end of the Array, in order.
    pub fn push_all<I: IntoIterator<Item = V>>(&mut self, values: I) {
        let iter = values.into_iter();
        self.reserve(iter.size_hint().0);

        for value in iter {
            self.push(value);
        }
    }

    /// Moves all elements of `other` onto the end of the Array, without cloning them.
    ///
    /// # Panics
    /// Panics if the memory layout of the Array would have a size that exceeds [`isize::MAX`].
    pub fn push_array(&mut self, mut other: Array<V>) {
        self.reserve(other.len);

        // SAFETY: reserve guarantees room for other.len values after the last element of self.
        // other is valid for other.len values from its head. Both are properly aligned and belong
        // to different allocations.
        unsafe {
            ptr::copy_nonoverlapping(
                other.buf.ptr.add(other.head).as_ptr().cast_const(),
                self.buf.ptr.add(self.head + self.len).as_ptr(),
                other.len,
            );
        }

        self.len += other.len;

        // The values now belong to self, so other only deallocates its Buffer.
        other.len = 0;
    }

    /// Removes the last value of the Array and returns it, or an
    /// [`EmptyAccess`](outcome::EmptyAccess) error if the Array is empty.
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::contiguous::Array;
    /// let mut arr = Array::from([1, 2]);
    /// assert_eq!(arr.pop().value(), 2);
    /// assert_eq!(arr.pop().value(), 1);
    /// assert!(!arr.pop().is_ok());
    /// ```
    pub fn pop(&mut self) -> outcome::Result<V> {
        if self.len == 0 {
            return outcome::Result::from_error(EmptyAccess);
        }

        // Decrement len before reading.
        self.len -= 1;

        // SAFETY: head + len is the last initialized value, which we are moving out of the Buffer
        // by forgetting about it.
        outcome::Result::ok(unsafe { self.read_at(self.head + self.len) })
    }

    /// Returns a reference to the last value of the Array without removing it, or an
    /// [`EmptyAccess`](outcome::EmptyAccess) error if the Array is empty.
    pub fn peek(&self) -> outcome::Result<&V> {
        match self.slice().last() {
            Some(value) => outcome::Result::ok(value),
            None => outcome::Result::from_error(EmptyAccess),
        }
    }

    /// Returns a reference to the value at `index`, or an
    /// [`IndexOutOfBounds`](outcome::IndexOutOfBounds) error.
    pub fn get(&self, index: usize) -> outcome::Result<&V> {
        match self.slice().get(index) {
            Some(value) => outcome::Result::ok(value),
            None => outcome::Result::from_error(self.out_of_bounds(index)),
        }
    }

    /// Returns a mutable reference to the value at `index`, or an
    /// [`IndexOutOfBounds`](outcome::IndexOutOfBounds) error.
    pub fn get_mut(&mut self, index: usize) -> outcome::Result<&mut V> {
        let error = self.out_of_bounds(index);
        match self.slice_mut().get_mut(index) {
            Some(value) => outcome::Result::ok(value),
            None => outcome::Result::from_error(error),
        }
    }

    /// Overwrites the value at `index`. Returns false, leaving the Array untouched, if `index` is
    /// out of bounds. The Array never grows as a result of this method.
    pub fn put(&mut self, index: usize, value: V) -> bool {
        match self.slice_mut().get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// Replaces the value at `index` with `value`, returning the old value.
    pub fn replace(&mut self, index: usize, value: V) -> outcome::Result<V> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Removes the element at `index`, moving all following values to fill in the gap, and
    /// returns it.
    ///
    /// Removing the first or last element doesn't move anything.
    pub fn remove(&mut self, index: usize) -> outcome::Result<V> {
        if index >= self.len {
            return outcome::Result::from_error(self.out_of_bounds(index));
        }

        if index == 0 {
            // SAFETY: The Array has at least one element.
            return outcome::Result::ok(unsafe { self.take_front().unreachable() });
        }

        let offset = self.head + index;
        // SAFETY: offset refers to an initialized value, which is forgotten by the Buffer when the
        // following values are moved on top of it.
        let value = unsafe { self.read_at(offset) };

        // SAFETY: Both ranges are within the initialized part of the Buffer and ptr::copy handles
        // the overlap.
        unsafe {
            ptr::copy(
                self.buf.ptr.add(offset + 1).as_ptr().cast_const(),
                self.buf.ptr.add(offset).as_ptr(),
                self.len - index - 1,
            );
        }

        self.len -= 1;
        outcome::Result::ok(value)
    }

    /// Drops the element at `index`, moving all following values to fill in the gap. Returns false
    /// if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::contiguous::Array;
    /// let mut arr = Array::from([2, 3, 4, 5]);
    /// assert!(arr.drop(1));
    /// assert_eq!(arr.slice(), &[2, 4, 5]);
    /// assert!(arr.drop(0));
    /// assert_eq!(arr.slice(), &[4, 5]);
    /// assert!(!arr.drop(2));
    /// ```
    pub fn drop(&mut self, index: usize) -> bool {
        self.remove(index).is_ok()
    }

    /// Ensures that the Array has room for an additional `extra` elements after its last one.
    ///
    /// # Panics
    /// Panics if the memory layout of the Array would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let Some(new_cap) = self.len.checked_add(extra) else {
            panic!("Capacity overflow!")
        };

        if new_cap <= self.cap() - self.head { return; }

        self.shift_to_front();
        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Reallocates the Array so that its capacity is exactly its length, releasing any excess
    /// memory. The elements themselves are unchanged.
    pub fn compact(&mut self) {
        self.shift_to_front();
        self.realloc_with_cap(self.len);
    }

    /// Returns the elements of the Array as a slice.
    pub fn slice(&self) -> &[V] {
        self
    }

    /// Returns the elements of the Array as a mutable slice.
    pub fn slice_mut(&mut self) -> &mut [V] {
        self
    }

    /// Returns the elements of the Array within `range` as a slice, or an
    /// [`IndexOutOfBounds`](outcome::IndexOutOfBounds) error if the range doesn't fit.
    ///
    /// # Examples
    /// ```
    /// # use sx::collections::contiguous::Array;
    /// let arr = Array::from([2, 3, 4, 5, 6, 7]);
    /// assert_eq!(arr.sub_slice(2..).value(), &[4, 5, 6, 7]);
    /// assert_eq!(arr.sub_slice(2..4).value(), &[4, 5]);
    /// assert!(!arr.sub_slice(4..9).is_ok());
    /// ```
    pub fn sub_slice<R: RangeBounds<usize>>(&self, range: R) -> outcome::Result<&[V]> {
        let start = range.start_bound().cloned();
        let end = range.end_bound().cloned();

        match self.slice().get((start, end)) {
            Some(slice) => outcome::Result::ok(slice),
            None => {
                let index = match end {
                    Bound::Included(i) => i.saturating_add(1),
                    Bound::Excluded(i) => i,
                    Bound::Unbounded => self.len,
                };
                outcome::Result::from_error(self.out_of_bounds(index))
            },
        }
    }

    /// Creates a cursor over the `(index, value)` pairs of the Array, positioned on index 0.
    pub fn cursor(&self) -> ArrayCursor<'_, V> {
        ArrayCursor::new(self)
    }

    /// Creates a cursor that doesn't borrow the Array, so that it can be modified during the
    /// traversal. See [`IndexCursor`] for how modifications affect it.
    pub const fn index_cursor(&self) -> IndexCursor {
        IndexCursor::new()
    }

    /// Creates an Array from a type which implements [`IntoIterator`] and creates an
    /// [`ExactSizeIterator`], allocating exactly once.
    pub fn from_iter_sized<I>(value: I) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = value.into_iter();
        let mut arr = Array::with_cap(iter.len());

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<V> Array<V> {
    /// Moves the value at the physical `offset` out of the Buffer.
    ///
    /// # Safety
    /// `offset` has to refer to an initialized value, which the caller then has to treat as
    /// uninitialized.
    pub(crate) unsafe fn read_at(&self, offset: usize) -> V {
        // SAFETY: The caller guarantees that offset is in bounds and initialized.
        unsafe { self.buf.ptr.add(offset).read().assume_init() }
    }

    /// Removes the first value in `O(1)`, by advancing the head of the Array.
    pub(crate) fn take_front(&mut self) -> Option<V> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: head refers to the first initialized value, which the Array forgets by moving
        // its head past it.
        let value = unsafe { self.read_at(self.head) };
        self.head += 1;
        self.len -= 1;

        if self.len == 0 {
            self.head = 0;
        }

        Some(value)
    }

    /// Moves all elements to the start of the Buffer, so that the head is 0.
    pub(crate) fn shift_to_front(&mut self) {
        if self.head == 0 { return; }

        // SAFETY: Both ranges are within the Buffer and ptr::copy handles the overlap.
        unsafe {
            ptr::copy(
                self.buf.ptr.add(self.head).as_ptr().cast_const(),
                self.buf.ptr.as_ptr(),
                self.len,
            );
        }

        self.head = 0;
    }

    /// Makes room for at least one more element at the end, either by reclaiming slots freed at
    /// the front or by growing.
    ///
    /// # Panics
    /// Panics if the memory layout of the Array would have a size that exceeds [`isize::MAX`].
    pub(crate) fn make_room(&mut self) {
        let reclaimed = self.head;
        self.shift_to_front();

        // Reclaiming less than half of the capacity would make alternating front drops and pushes
        // quadratic.
        if reclaimed * GROWTH_FACTOR < self.cap() || self.len == self.cap() {
            self.grow();
        }
    }

    /// Grows the internal Buffer by the growth factor. After calling this, the Array can take at
    /// least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Array would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP);
        self.realloc_with_cap(new_cap);
    }

    /// Reallocates the internal Buffer with the provided capacity. The head has to be 0 and
    /// `new_cap` at least the length.
    ///
    /// # Panics
    /// Panics if the memory layout of the Array would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(self.head == 0 && new_cap >= self.len);
        log::trace!("Array capacity {} -> {} (len {})", self.cap(), new_cap, self.len);
        self.buf.realloc(new_cap);
    }

    pub(crate) const fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            index,
            len: self.len,
        }
    }
}

impl<V> Container for Array<V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<V> Iterable for Array<V> {
    type Value = V;

    type Cursor<'a> = ArrayCursor<'a, V> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        Array::cursor(self)
    }
}

impl<V> Map for Array<V> {
    type Key = usize;

    fn has(&self, key: &usize) -> bool {
        Array::has(self, *key)
    }

    fn get(&self, key: &usize) -> outcome::Result<&V> {
        Array::get(self, *key)
    }

    fn put(&mut self, key: usize, value: V) -> bool {
        Array::put(self, key, value)
    }

    fn drop(&mut self, key: &usize) -> bool {
        Array::drop(self, *key)
    }
}

impl<V> Stack for Array<V> {
    type Value = V;

    fn push(&mut self, value: V) {
        Array::push(self, value)
    }

    fn pop(&mut self) -> outcome::Result<V> {
        Array::pop(self)
    }

    fn peek(&self) -> outcome::Result<&V> {
        Array::peek(self)
    }
}

impl<V> Extend<V> for Array<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<V> FromIterator<V> for Array<V> {
    fn from_iter<I: IntoIterator<Item = V>>(value: I) -> Self {
        let mut arr = Array::new();
        arr.push_all(value);
        arr
    }
}

impl<V, const N: usize> From<[V; N]> for Array<V> {
    fn from(value: [V; N]) -> Self {
        Array::from_iter_sized(value)
    }
}

impl<V> From<Vec<V>> for Array<V> {
    fn from(value: Vec<V>) -> Self {
        Array::from_iter_sized(value)
    }
}

impl<V> From<Array<V>> for Vec<V> {
    fn from(value: Array<V>) -> Self {
        value.into_iter().collect()
    }
}

impl<V> Default for Array<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for Array<V> {
    fn drop(&mut self) {
        // SAFETY: All values from head to head + len are initialized and safe to drop. The Buffer
        // only holds MaybeUninit values, so they aren't dropped a second time when it is
        // deallocated.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.add(self.head).as_ptr().cast::<V>(),
                self.len,
            ));
        }
    }
}

impl<V> Deref for Array<V> {
    type Target = [V];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The Array is valid as a slice for len values from head, which are all
        // initialized. The pointer is nonnull, properly aligned and the range entirely contained
        // within the Buffer. MaybeUninit<V> has the same layout as V.
        unsafe {
            slice::from_raw_parts(
                self.buf.ptr.add(self.head).as_ptr().cast_const().cast::<V>(),
                self.len,
            )
        }
    }
}

impl<V> DerefMut for Array<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and self is borrowed mutably for the lifetime of the slice.
        unsafe {
            slice::from_raw_parts_mut(
                self.buf.ptr.add(self.head).as_ptr().cast::<V>(),
                self.len,
            )
        }
    }
}

impl<V> AsRef<[V]> for Array<V> {
    fn as_ref(&self) -> &[V] {
        self
    }
}

impl<V> AsMut<[V]> for Array<V> {
    fn as_mut(&mut self) -> &mut [V] {
        self
    }
}

impl<V> Borrow<[V]> for Array<V> {
    fn borrow(&self) -> &[V] {
        self
    }
}

impl<V> BorrowMut<[V]> for Array<V> {
    fn borrow_mut(&mut self) -> &mut [V] {
        self
    }
}

impl<V: Clone> Clone for Array<V> {
    fn clone(&self) -> Self {
        Array::from_iter_sized(self.iter().cloned())
    }
}

impl<V: PartialEq> PartialEq for Array<V> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<V: Eq> Eq for Array<V> {}

impl<V: Hash> Hash for Array<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<V: Debug> Debug for Array<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<V: Display> Display for Array<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|v| DebugRaw(v.to_string()))).finish()
    }
}
