use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

#[cfg(test)]
#[path = "../tests/model/de_tests.rs"]
mod tests;
