//! Binding of UUIDs to SQL driver values.
//!
//! [`DriverValue`] is the neutral set of values exchanged with a database driver. [`Scan`] reads a
//! type from a driver value and [`Valuer`] produces one. Both are implemented for [`Uuid`], which
//! is the binding [`NullUuid`] delegates to for non-null values.
use uuid::Uuid;

use crate::{Error, NullUuid, Result};

/// A value as passed to or returned from a SQL driver.
#[derive(Clone, Debug, PartialEq)]
pub enum DriverValue {
	/// SQL `NULL`.
	Null,
	Int(i64),
	Float(f64),
	Bool(bool),
	Bytes(Vec<u8>),
	Text(String),
}

impl DriverValue {
	pub fn is_null(&self) -> bool {
		matches!(self, DriverValue::Null)
	}

	/// Name of the kind of value, used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			DriverValue::Null => "null",
			DriverValue::Int(_) => "int",
			DriverValue::Float(_) => "float",
			DriverValue::Bool(_) => "bool",
			DriverValue::Bytes(_) => "bytes",
			DriverValue::Text(_) => "text",
		}
	}
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(DriverValue::Null)
	}
}

macro_rules! impl_from {
	($ty:ty, $variant:ident) => {
		impl From<$ty> for DriverValue {
			fn from(value: $ty) -> Self {
				DriverValue::$variant(value.into())
			}
		}
	};
}

impl_from! {i64, Int}
impl_from! {i32, Int}
impl_from! {f64, Float}
impl_from! {bool, Bool}
impl_from! {Vec<u8>, Bytes}
impl_from! {&[u8], Bytes}
impl_from! {String, Text}
impl_from! {&str, Text}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
	#[error("Scan: {0}")]
	Parse(#[from] uuid::Error),
	#[error("Scan: UUID bytes are not valid utf8")]
	Utf8,
	#[error("Scan: unable to scan type {0} into UUID")]
	UnsupportedType(&'static str),
}

/// Types which can be read from a [`DriverValue`].
pub trait Scan {
	type Error;

	fn scan(&mut self, src: &DriverValue) -> std::result::Result<(), Self::Error>;
}

/// Types which can be converted into a [`DriverValue`].
pub trait Valuer {
	type Error;

	fn value(&self) -> std::result::Result<DriverValue, Self::Error>;
}

impl Scan for Uuid {
	type Error = ScanError;

	/// Null, empty text and empty bytes leave the UUID unchanged. Exactly 16 bytes are copied as
	/// raw bytes, any other byte length is parsed as text.
	fn scan(&mut self, src: &DriverValue) -> std::result::Result<(), ScanError> {
		match src {
			DriverValue::Null => Ok(()),
			DriverValue::Text(x) if x.is_empty() => Ok(()),
			DriverValue::Text(x) => {
				*self = Uuid::parse_str(x)?;
				Ok(())
			}
			DriverValue::Bytes(x) if x.is_empty() => Ok(()),
			DriverValue::Bytes(x) => {
				if let Ok(bytes) = <[u8; 16]>::try_from(x.as_slice()) {
					*self = Uuid::from_bytes(bytes);
					return Ok(());
				}
				let text = std::str::from_utf8(x).map_err(|_| ScanError::Utf8)?;
				*self = Uuid::parse_str(text)?;
				Ok(())
			}
			x => Err(ScanError::UnsupportedType(x.kind())),
		}
	}
}

impl Valuer for Uuid {
	type Error = ScanError;

	fn value(&self) -> std::result::Result<DriverValue, ScanError> {
		Ok(DriverValue::Text(self.hyphenated().to_string()))
	}
}

impl Scan for NullUuid {
	type Error = Error;

	fn scan(&mut self, src: &DriverValue) -> Result<()> {
		if src.is_null() {
			*self = NullUuid::null();
			return Ok(());
		}
		match self.uuid.scan(src) {
			Ok(()) => {
				self.valid = true;
				Ok(())
			}
			Err(e) => {
				tracing::debug!(kind = src.kind(), error = %e, "failed to scan UUID");
				self.valid = false;
				Err(Error::scan(e))
			}
		}
	}
}

impl Valuer for NullUuid {
	type Error = Error;

	fn value(&self) -> Result<DriverValue> {
		match self.as_option() {
			Some(x) => x.value().map_err(Error::scan),
			None => Ok(DriverValue::Null),
		}
	}
}
