use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::{NullUuid, Result};

const NULL_TEXT: &[u8] = b"null";

impl NullUuid {
	/// Encodes the value as text.
	///
	/// Null values are written as `null`, which [`NullUuid::unmarshal_text`] does not accept back.
	pub fn marshal_text(&self) -> Vec<u8> {
		if !self.valid {
			return NULL_TEXT.to_vec();
		}
		let mut buffer = Uuid::encode_buffer();
		self.uuid.hyphenated().encode_lower(&mut buffer).as_bytes().to_vec()
	}

	/// Decodes a UUID from text.
	///
	/// Accepts the forms the `uuid` crate parses: hyphenated, simple, braced and urn. On failure
	/// the value is marked null and the inner UUID is left as it was.
	pub fn unmarshal_text(&mut self, data: &[u8]) -> Result<()> {
		match Uuid::try_parse_ascii(data) {
			Ok(x) => {
				self.set_valid(x);
				Ok(())
			}
			Err(e) => {
				tracing::debug!(len = data.len(), error = %e, "failed to unmarshal UUID text");
				self.valid = false;
				Err(e.into())
			}
		}
	}
}

impl fmt::Display for NullUuid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.as_option() {
			Some(x) => fmt::Display::fmt(&x.hyphenated(), f),
			None => f.write_str("null"),
		}
	}
}

impl FromStr for NullUuid {
	type Err = crate::Error;

	/// Parses with the same rules as [`NullUuid::unmarshal_text`], so `"null"` is rejected.
	fn from_str(s: &str) -> Result<Self> {
		let mut res = NullUuid::null();
		res.unmarshal_text(s.as_bytes())?;
		Ok(res)
	}
}
