use uuid::Uuid;

use crate::{Error, NullUuid, Result};

impl NullUuid {
	/// Encodes the value as its 16 raw bytes, or as no bytes at all when null.
	pub fn marshal_binary(&self) -> Vec<u8> {
		match self.as_option() {
			Some(x) => x.as_bytes().to_vec(),
			None => Vec::new(),
		}
	}

	/// Decodes exactly 16 raw bytes into the value.
	///
	/// Any other length is an error and marks the value null, including the empty input produced
	/// by [`NullUuid::marshal_binary`] for a null value.
	pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
		let Ok(bytes) = <[u8; 16]>::try_from(data) else {
			tracing::debug!(len = data.len(), "invalid UUID binary length");
			self.valid = false;
			return Err(Error::LengthMismatch(data.len()));
		};
		self.set_valid(Uuid::from_bytes(bytes));
		Ok(())
	}
}
