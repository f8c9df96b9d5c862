//! API Response types
//!
//! Every successful admin API call answers with the same envelope:
//! ```json
//! { "data": { ... } }
//! ```
//!
//! A body-less success (`204 No Content`) reads as `null`, which decodes
//! into an envelope whenever `T` itself accepts nothing, e.g. [`Empty`] or
//! `Option<_>`.

use serde::de::value::UnitDeserializer;
use serde::{Deserialize, Serialize};

/// Success envelope `{ "data": T }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<'de, T> Deserialize<'de> for DataEnvelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire<T> {
            data: T,
        }

        match Option::<Wire<T>>::deserialize(deserializer)? {
            Some(wire) => Ok(Self::new(wire.data)),
            None => T::deserialize(UnitDeserializer::<D::Error>::new()).map(Self::new),
        }
    }
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwrap the payload
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Empty response (unit type)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Serialize for Empty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_none()
    }
}

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(Empty)
    }
}
