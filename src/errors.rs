//! Contains error types used throughout the library.



//		Packages																										

use core::num::ParseIntError;
use thiserror::Error as ThisError;



//		Enums																											

//		ConversionError															
/// Represents all possible conversion errors that can occur.
/// 
/// Saturating conversions never produce these; they are only returned by the
/// fallible conversion paths, i.e. [`try_cast()`](crate::try_cast()), the
/// [`TryFrom`] implementations, and parsing.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is not a valid integer.
	#[error("Invalid integer: {0}")]
	ParseIntError(#[from] ParseIntError),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
	
	/// The incoming value is below the minimum of the signed destination type.
	#[error("Value too small")]
	ValueTooSmall,
}
