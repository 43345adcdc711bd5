use std::hash::{BuildHasher, Hash};
use std::result::Result as StdResult;

use serde::de::{DeserializeOwned, Deserializer as _};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::impls::MergeInto;
use crate::collections::hash::HashMap;
use crate::outcome::{self, Error};

/// Encodes `value` as compact JSON.
///
/// # Examples
/// ```
/// # use sx::collections::contiguous::Array;
/// # use sx::json;
/// let arr = Array::from([1, 2, 3]);
/// assert_eq!(json::to_json(&arr).value(), "[1,2,3]");
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> outcome::Result<String> {
    serde_json::to_string(value).into()
}

/// Encodes `value` as JSON with one entry per line, nested `indent` spaces per level.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T, indent: usize) -> outcome::Result<String> {
    fn encode<T: Serialize + ?Sized>(value: &T, indent: &[u8]) -> StdResult<String, Error> {
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut out,
            PrettyFormatter::with_indent(indent),
        );
        value.serialize(&mut serializer)?;

        String::from_utf8(out).map_err(|_| Error::failure("Encoder produced invalid UTF-8!"))
    }

    encode(value, " ".repeat(indent).as_bytes()).into()
}

/// Decodes a `T` from `text`.
///
/// # Examples
/// ```
/// # use sx::collections::hash::HashMap;
/// # use sx::json;
/// let map: HashMap<String, u8> = json::from_json(r#"{"a": 1}"#).value();
/// assert_eq!(map.get("a").value(), &1);
///
/// let broken = json::from_json::<HashMap<String, u8>>(r#"{"a": }"#);
/// assert!(broken.error().is_json());
/// ```
pub fn from_json<T: DeserializeOwned>(text: &str) -> outcome::Result<T> {
    serde_json::from_str(text).into()
}

/// Decodes a JSON object from `text` into an existing map, returning the number of entries read.
///
/// Keys present in `text` replace the values already in `map`, other keys are left as they are. If
/// decoding fails part way through, the entries decoded before the failure remain in `map`.
///
/// # Examples
/// ```
/// # use sx::collections::hash::HashMap;
/// # use sx::json;
/// let mut map = HashMap::<String, u8>::from([("a".to_owned(), 1), ("b".to_owned(), 2)]);
/// assert_eq!(json::merge_json(&mut map, r#"{"b": 20, "c": 30}"#).value(), 2);
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get("a").value(), &1);
/// assert_eq!(map.get("b").value(), &20);
/// ```
pub fn merge_json<K, V, B>(map: &mut HashMap<K, V, B>, text: &str) -> outcome::Result<usize>
where
    K: Hash + Eq + DeserializeOwned,
    V: DeserializeOwned,
    B: BuildHasher,
{
    let mut deserializer = serde_json::Deserializer::from_str(text);

    let merged = (&mut deserializer).deserialize_map(MergeInto(map))
        .and_then(|count| deserializer.end().map(|()| count));

    if let Ok(count) = merged {
        log::trace!("Merged {count} entries from JSON");
    }

    merged.into()
}
