//! Name-based lookup over collections that Portainer only indexes by numeric id.

use crate::{Error, Result};
use serde_json::Value;

/// Return the first record whose `field` equals `name` exactly.
///
/// Linear scan; collections here are tens to low hundreds of entries and the
/// API offers no name index.
pub fn find_by_name<I>(items: I, field: &str, name: &str, kind: &str) -> Result<Value>
where
    I: IntoIterator<Item = Value>,
{
    items
        .into_iter()
        .find(|item| item.get(field).and_then(Value::as_str) == Some(name))
        .ok_or_else(|| Error::not_found(kind, name))
}
