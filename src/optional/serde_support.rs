//! Serde support: an `Optional<T>` has the same representation as `Option<T>`.

use super::Optional;

impl<T> serde::Serialize for Optional<T>
where
    T: serde::Serialize + Clone,
{
    /// Materializes the value and serializes it like `Option<T>`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_option(), serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::of_nullable)
    }
}
