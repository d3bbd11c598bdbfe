// ============================================================================
// Serde Support
// Values travel as exact decimal strings
// ============================================================================

use super::format::MAX_CHARS;
use crate::compose::Layout;
use crate::scaled::Scaled;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<L: Layout> Serialize for Scaled<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; MAX_CHARS];
        let len = self.to_chars(&mut buf).map_err(serde::ser::Error::custom)?;
        let text = std::str::from_utf8(&buf[..len]).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(text)
    }
}

struct ScaledVisitor<L>(PhantomData<fn() -> L>);

impl<'de, L: Layout> Visitor<'de> for ScaledVisitor<L> {
    type Value = Scaled<L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string such as \"-15.875\"")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        text.parse().map_err(E::custom)
    }
}

impl<'de, L: Layout> Deserialize<'de> for Scaled<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ScaledVisitor(PhantomData))
    }
}
