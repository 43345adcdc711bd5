use crate::collections::contiguous::Array;
use crate::collections::traits::{Cursor, Iterable, KeyOf, Pair};
use crate::outcome::Optional;

/// Returns the first pair, in traversal order, for which `predicate` returns true. Stops
/// traversing as soon as a match is found.
///
/// # Examples
/// ```
/// # use sx::algorithm::find_first_where;
/// # use sx::collections::contiguous::Array;
/// let arr = Array::from([3, 8, 5, 10]);
/// let found = find_first_where(&arr, |_, value| *value > 4).value();
/// assert_eq!((found.key, *found.value), (1, 8));
/// assert!(find_first_where(&arr, |_, value| *value > 10).is_empty());
/// ```
pub fn find_first_where<'a, M, F>(container: &'a M, mut predicate: F) -> Optional<Pair<KeyOf<'a, M>, &'a M::Value>>
where
    M: Iterable,
    F: FnMut(&KeyOf<'a, M>, &M::Value) -> bool,
{
    let mut cursor = container.cursor();

    while cursor.ok() {
        let (key, value) = (cursor.key(), cursor.value());
        if predicate(&key, value) {
            return Optional::from(Pair::new(key, value));
        }
        cursor.next();
    }

    Optional::empty()
}

/// Returns every pair for which `predicate` returns true, in traversal order.
pub fn find_all<'a, M, F>(container: &'a M, mut predicate: F) -> Array<Pair<KeyOf<'a, M>, &'a M::Value>>
where
    M: Iterable,
    F: FnMut(&KeyOf<'a, M>, &M::Value) -> bool,
{
    let mut found = Array::new();
    let mut cursor = container.cursor();

    while cursor.ok() {
        let (key, value) = (cursor.key(), cursor.value());
        if predicate(&key, value) {
            found.push(Pair::new(key, value));
        }
        cursor.next();
    }

    found
}

/// Returns true if any value of `container` is equal to `value`. For keys, use
/// [`Map::has`](crate::collections::traits::Map::has) instead.
pub fn contains_value<M>(container: &M, value: &M::Value) -> bool
where
    M: Iterable,
    M::Value: PartialEq,
{
    !find_first_where(container, |_, candidate| candidate == value).is_empty()
}

/// Returns a copy of `arr` without the values for which `predicate` returns true, keeping the
/// order of the rest. Unlike [`Array::drop`], `arr` itself is left untouched.
///
/// # Examples
/// ```
/// # use sx::algorithm::remove_all;
/// # use sx::collections::contiguous::Array;
/// let arr = Array::from([1, 2, 3, 4, 5]);
/// assert_eq!(remove_all(&arr, |v| v % 2 == 0).slice(), &[1, 3, 5]);
/// assert_eq!(arr.len(), 5);
/// ```
pub fn remove_all<V, F>(arr: &Array<V>, mut predicate: F) -> Array<V>
where
    V: Clone,
    F: FnMut(&V) -> bool,
{
    let mut kept = Array::with_cap(arr.len());
    let mut cursor = arr.cursor();

    while cursor.ok() {
        let value = cursor.value();
        if !predicate(value) {
            kept.push(value.clone());
        }
        cursor.next();
    }

    kept
}

/// Applies `mapper` to every remaining pair of `cursor`, collecting the present results in order.
/// This filters and transforms in one pass.
///
/// # Examples
/// ```
/// # use sx::algorithm::map_values;
/// # use sx::collections::contiguous::Array;
/// # use sx::outcome::Optional;
/// let arr = Array::from(["1", "x", "3"]);
/// let parsed = map_values(arr.cursor(), |_, s| Optional::from_option(s.parse::<u8>().ok()));
/// assert_eq!(parsed.slice(), &[1, 3]);
/// ```
pub fn map_values<C, T, F>(mut cursor: C, mut mapper: F) -> Array<T>
where
    C: Cursor,
    F: FnMut(C::Key, C::Value) -> Optional<T>,
{
    let mut mapped = Array::new();

    while cursor.ok() {
        if let Some(value) = mapper(cursor.key(), cursor.value()).into_option() {
            mapped.push(value);
        }
        cursor.next();
    }

    mapped
}
