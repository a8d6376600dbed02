//! `O<T>` on the wire looks like a nullable field: `Some(v)` is `v` and
//! `None` is `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::O;

impl<T: Serialize> Serialize for O<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            O::Some(val) => serializer.serialize_some(val),
            O::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for O<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(O::from)
    }
}
