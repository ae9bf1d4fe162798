use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use crate::{Error, NullUuid, Result};

impl NullUuid {
	/// Encodes the value as JSON, either `null` or a quoted hyphenated UUID string.
	pub fn marshal_json(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(self)?)
	}

	/// Decodes a JSON document into the value.
	///
	/// `null` marks the value as null without touching the inner UUID. A string must parse as a
	/// UUID, a malformed string is an error and is not treated as null. Objects are handed to the
	/// deserializer of [`Uuid`]. Any other JSON type is rejected with
	/// [`Error::UnsupportedShape`]. The value is marked null on every failure.
	pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
		let res = serde_json::from_slice::<Value>(data).map_err(Error::from).and_then(|value| {
			match &value {
				Value::Null => Ok(None),
				Value::String(x) => Ok(Some(Uuid::parse_str(x)?)),
				Value::Object(_) => Ok(Some(Uuid::deserialize(&value)?)),
				Value::Bool(_) => Err(Error::UnsupportedShape("boolean")),
				Value::Number(_) => Err(Error::UnsupportedShape("number")),
				Value::Array(_) => Err(Error::UnsupportedShape("array")),
			}
		});
		match res {
			Ok(Some(x)) => {
				self.set_valid(x);
				Ok(())
			}
			Ok(None) => {
				self.valid = false;
				Ok(())
			}
			Err(e) => {
				tracing::debug!(len = data.len(), error = %e, "failed to unmarshal UUID JSON");
				self.valid = false;
				Err(e)
			}
		}
	}
}

impl Serialize for NullUuid {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self.as_option() {
			Some(x) => serializer.serialize_some(&x),
			None => serializer.serialize_none(),
		}
	}
}

struct NullUuidVisitor;

impl<'de> Visitor<'de> for NullUuidVisitor {
	type Value = NullUuid;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("an optional UUID")
	}

	fn visit_none<E: de::Error>(self) -> std::result::Result<NullUuid, E> {
		Ok(NullUuid::null())
	}

	fn visit_unit<E: de::Error>(self) -> std::result::Result<NullUuid, E> {
		Ok(NullUuid::null())
	}

	/// The inner value is read with the deserializer of [`Uuid`], which expects a string in
	/// human readable formats and 16 bytes otherwise.
	fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<NullUuid, D::Error> {
		Uuid::deserialize(d).map(NullUuid::from_uuid)
	}
}

impl<'de> Deserialize<'de> for NullUuid {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_option(NullUuidVisitor)
	}
}
