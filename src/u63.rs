//! Custom u63 type.



//		Modules																											

#[cfg(test)]
#[path = "tests/u63.rs"]
mod tests;



//		Packages																										

use crate::{
	cast::{cast, try_cast},
	errors::ConversionError,
	int::FixedInt,
};
use core::{
	fmt::{Display, Formatter, self},
	num::IntErrorKind,
	ops::{Add, Deref, Div, Mul, Rem, Sub},
	str::FromStr,
};
use serde::{Deserialize, Serialize};



//		Structs																											

//		u63																		
/// A 63-bit unsigned integer.
/// 
/// This type is used to represent the crossover between a [`u64`] (which would
/// be the choice for the types used in Rust) and an [`i64`] (which is a
/// limitation of certain databases, e.g. PostgreSQL). Every value fits in
/// both, so it can be stored as a `BIGINT` without losing information or
/// needing to reinterpret the sign bit.
/// 
/// # Arithmetic
/// 
/// The arithmetic operators never panic:
/// 
///   1. Addition, subtraction, and multiplication saturate at [`u63::MIN`]
///      and [`u63::MAX`].
///   2. Division by zero returns [`u63::MAX`]. Modulo by zero acts in the same
///      way.
/// 
/// The `checked_*()` methods are available where overflow needs to be
/// detected instead.
/// 
/// # Conversion
/// 
/// This type implements [`FixedInt`], so it can be used with
/// [`cast()`](crate::cast()) and [`try_cast()`](crate::try_cast()) in either
/// direction, against any other integer type.
/// 
/// In addition, where the conversion is lossless, [`From`] is implemented, and
/// where it is potentially lossy, [`TryFrom`] is implemented, for all of:
/// 
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`u128`], [`usize`]
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`i128`], [`isize`]
/// 
/// # Serialisation
/// 
/// The value is serialised as a plain unsigned integer. Deserialising a value
/// outside the 63-bit range fails.
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[expect(non_camel_case_types, reason = "Needed to fit with convention")]
#[serde(try_from = "u64", into = "u64")]
pub struct u63(u64);

//󰭅		u63																		
impl u63 {
	//		Public constants													
	/// The minimum value for a `u63`.
	pub const MIN: Self = Self(0);
	
	/// The maximum value for a `u63`.
	#[expect(clippy::cast_sign_loss, reason = "Positive")]
	pub const MAX: Self = Self(i64::MAX as u64);
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`u63`] from a [`u64`].
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to create the [`u63`] from.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the value is too large to fit in a [`u63`].
	/// 
	pub fn new(value: u64) -> Result<Self, ConversionError> {
		try_cast(value)
	}
	
	//		Public methods														
	
	//		as_u64																
	/// Represents the internal value as an unsigned 64-bit integer.
	#[must_use]
	pub const fn as_u64(&self) -> u64 {
		self.0
	}
	
	//		as_i64																
	/// Represents the internal value as a signed 64-bit integer.
	#[expect(clippy::cast_possible_wrap, reason = "Safe, as fully managed")]
	#[must_use]
	pub const fn as_i64(&self) -> i64 {
		self.0 as i64
	}
	
	//		checked_add															
	/// Checked addition.
	/// 
	/// Computes `self + rhs`, returning [`None`] if the result exceeds
	/// [`u63::MAX`].
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		self.0.checked_add(rhs.0).and_then(|v| Self::new(v).ok())
	}
	
	//		checked_div															
	/// Checked division.
	/// 
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	#[must_use]
	pub const fn checked_div(self, rhs: Self) -> Option<Self> {
		match self.0.checked_div(rhs.0) {
			Some(v) => Some(Self(v)),
			None    => None,
		}
	}
	
	//		checked_mul															
	/// Checked multiplication.
	/// 
	/// Computes `self * rhs`, returning [`None`] if the result exceeds
	/// [`u63::MAX`].
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply `self` by.
	/// 
	#[must_use]
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		self.0.checked_mul(rhs.0).and_then(|v| Self::new(v).ok())
	}
	
	//		checked_rem															
	/// Checked remainder.
	/// 
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	#[must_use]
	pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
		match self.0.checked_rem(rhs.0) {
			Some(v) => Some(Self(v)),
			None    => None,
		}
	}
	
	//		checked_sub															
	/// Checked subtraction.
	/// 
	/// Computes `self - rhs`, returning [`None`] if the result would be
	/// negative.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
		match self.0.checked_sub(rhs.0) {
			Some(v) => Some(Self(v)),
			None    => None,
		}
	}
}

//󰭅		Add																		
impl Add for u63 {
	type Output = Self;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		cast(self.0.saturating_add(rhs.0))
	}
}

//󰭅		Deref																	
impl Deref for u63 {
	type Target = u64;
	
	//		deref																
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

//󰭅		Display																	
impl Display for u63 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

//󰭅		Div																		
impl Div for u63 {
	type Output = Self;
	
	//		div																	
	fn div(self, rhs: Self) -> Self::Output {
		self.checked_div(rhs).unwrap_or(Self::MAX)
	}
}

//󰭅		FixedInt																
impl FixedInt for u63 {
	const BITS:          u32  = 63;
	const SIGNED:        bool = false;
	const MIN:           Self = Self::MIN;
	const MAX:           Self = Self::MAX;
	#[expect(clippy::cast_lossless, reason = "From is not available in const context")]
	const MAX_MAGNITUDE: u128 = Self::MAX.0 as u128;
	const MIN_MAGNITUDE: u128 = 0;
	
	//		is_negative															
	fn is_negative(self) -> bool {
		false
	}
	
	//		to_wide																
	fn to_wide(self) -> u128 {
		u128::from(self.0)
	}
	
	//		from_wide															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	fn from_wide(wide: u128) -> Self {
		Self((wide as u64) & Self::MAX.0)
	}
}

//󰭅		FromStr																	
impl FromStr for u63 {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		//	Parsing wider than needed lets negatives report as such
		match s.parse::<i128>() {
			Ok(value) => try_cast(value),
			Err(err)  => match err.kind() {
				IntErrorKind::PosOverflow => Err(ConversionError::ValueTooLarge),
				IntErrorKind::NegOverflow => Err(ConversionError::ValueIsNegative),
				_                         => Err(err.into()),
			},
		}
	}
}

//󰭅		Mul																		
impl Mul for u63 {
	type Output = Self;
	
	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		cast(self.0.saturating_mul(rhs.0))
	}
}

//󰭅		Rem																		
impl Rem for u63 {
	type Output = Self;
	
	//		rem																	
	fn rem(self, rhs: Self) -> Self::Output {
		self.checked_rem(rhs).unwrap_or(Self::MAX)
	}
}

//󰭅		Sub																		
impl Sub for u63 {
	type Output = Self;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		Self(self.0.saturating_sub(rhs.0))
	}
}



//		Macros																											

//		lossless!																
/// Implements [`From`] in both directions where every value fits.
macro_rules! lossless {
	(into: $($t:ty),*) => {$(
		//󰭅		From: $t -> u63													
		impl From<$t> for u63 {
			//		from														
			fn from(v: $t) -> Self {
				cast(v)
			}
		}
	)*};
	(from: $($t:ty),*) => {$(
		//󰭅		From: u63 -> $t													
		impl From<u63> for $t {
			//		from														
			fn from(v: u63) -> Self {
				cast(v)
			}
		}
	)*};
}

//		lossy!																	
/// Implements [`TryFrom`] in both directions where values may not fit.
macro_rules! lossy {
	(into: $($t:ty),*) => {$(
		//󰭅		TryFrom: $t -> u63												
		impl TryFrom<$t> for u63 {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: $t) -> Result<Self, Self::Error> {
				try_cast(v)
			}
		}
	)*};
	(from: $($t:ty),*) => {$(
		//󰭅		TryFrom: u63 -> $t												
		impl TryFrom<u63> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: u63) -> Result<Self, Self::Error> {
				try_cast(v)
			}
		}
	)*};
}

lossless!(into: u8, u16, u32);
lossless!(from: i64, i128, u64, u128);
lossy!(into:    i8, i16, i32, i64, i128, isize, u64, u128, usize);
lossy!(from:    i8, i16, i32, isize, u8, u16, u32, usize);
