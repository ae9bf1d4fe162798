//! A nullable [`Uuid`] which keeps well defined behaviour across JSON, plain text, fixed width
//! binary and SQL driver value boundaries.
//!
//! [`NullUuid`] pairs a UUID with a validity flag. When the flag is unset the value is logically
//! null and the stored UUID is never observable through any encoding.
//!
//! # Sharp edges
//!
//! Not every encoding is symmetric for the null state:
//! - Text encoding writes `null` for a null value, but decoding `null` as text fails since it is
//!   not a UUID literal.
//! - Binary encoding writes no bytes for a null value, but decoding requires exactly 16 bytes and
//!   an empty input is an error rather than null.
use std::error::Error as StdError;
use std::hash::{Hash, Hasher};

pub use uuid::Uuid;

mod binary;
#[cfg(feature = "serde")]
mod json;
mod sql;
mod text;


pub use sql::{DriverValue, Scan, ScanError, Valuer};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Input text was not a valid UUID.
	#[error("null: invalid UUID: {0}")]
	Parse(#[from] uuid::Error),
	/// JSON input was neither a string, an object nor null.
	#[error("null: couldn't unmarshal JSON {0} into value of type NullUuid")]
	UnsupportedShape(&'static str),
	/// Binary input was not exactly 16 bytes long.
	#[error("null: invalid UUID (got {0} bytes)")]
	LengthMismatch(usize),
	/// Scanning a driver value into the inner UUID failed.
	#[error("null: {0}")]
	Scan(#[source] Box<dyn StdError + Send + Sync>),
	/// JSON input was malformed or could not be read as a UUID.
	#[cfg(feature = "serde")]
	#[error("null: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Utility function to turn any error into a scan error.
	pub fn scan<E: StdError + Send + Sync + 'static>(e: E) -> Self {
		Error::Scan(Box::new(e))
	}
}

pub type Result<T> = std::result::Result<T, Error>;

/// A UUID which may be null.
///
/// The `uuid` field is only meaningful when `valid` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullUuid {
	pub uuid: Uuid,
	pub valid: bool,
}

impl NullUuid {
	/// Creates a new value. `uuid` is stored as is, even when `valid` is false.
	pub const fn new(uuid: Uuid, valid: bool) -> Self {
		NullUuid {
			uuid,
			valid,
		}
	}

	/// Creates a value which is always valid.
	pub const fn from_uuid(uuid: Uuid) -> Self {
		Self::new(uuid, true)
	}

	/// Creates a value which is null if `uuid` is `None`.
	pub fn from_option(uuid: Option<&Uuid>) -> Self {
		match uuid {
			Some(x) => Self::new(*x, true),
			None => Self::null(),
		}
	}

	pub const fn null() -> Self {
		Self::new(Uuid::nil(), false)
	}

	/// Returns the inner UUID if valid, otherwise the nil UUID.
	pub fn value_or_zero(&self) -> Uuid {
		if self.valid {
			self.uuid
		} else {
			Uuid::nil()
		}
	}

	pub fn set_valid(&mut self, uuid: Uuid) {
		self.uuid = uuid;
		self.valid = true;
	}

	pub fn as_option(&self) -> Option<Uuid> {
		self.valid.then_some(self.uuid)
	}

	/// Returns true for null values. A valid nil UUID is not zero.
	pub fn is_zero(&self) -> bool {
		!self.valid
	}

	/// Returns true if both values are null, or both are valid and hold the same UUID.
	pub fn equal(&self, other: &NullUuid) -> bool {
		self.as_option() == other.as_option()
	}
}

impl PartialEq for NullUuid {
	fn eq(&self, other: &Self) -> bool {
		self.equal(other)
	}
}

impl Eq for NullUuid {}

impl Hash for NullUuid {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_option().hash(state)
	}
}

impl From<Uuid> for NullUuid {
	fn from(value: Uuid) -> Self {
		Self::from_uuid(value)
	}
}

impl From<Option<Uuid>> for NullUuid {
	fn from(value: Option<Uuid>) -> Self {
		Self::from_option(value.as_ref())
	}
}

impl From<Option<&Uuid>> for NullUuid {
	fn from(value: Option<&Uuid>) -> Self {
		Self::from_option(value)
	}
}

impl From<NullUuid> for Option<Uuid> {
	fn from(value: NullUuid) -> Self {
		value.as_option()
	}
}
