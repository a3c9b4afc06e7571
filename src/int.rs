//! The capability bound shared by every integer type that can be cast.



//		Modules																											

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages																										

use core::fmt::{Debug, Display};



//		Constants																										

/// Width of the common comparison domain, in bits.
/// 
/// Cross-type comparisons are carried out in [`u128`] (or [`i128`] for pairs
/// of signed types), which holds the whole positive range of every primitive
/// integer. [`FixedInt`] implementations wider than this cannot be cast, and
/// are rejected at compile time:
/// 
/// ```compile_fail
/// use core::fmt::{self, Display, Formatter};
/// use satcast::{FixedInt, cast};
/// 
/// #[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
/// struct Wide(u128);
/// 
/// impl Display for Wide {
/// 	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
/// 		write!(f, "{}", self.0)
/// 	}
/// }
/// 
/// impl FixedInt for Wide {
/// 	const BITS:          u32  = 200;
/// 	const SIGNED:        bool = false;
/// 	const MIN:           Self = Self(0);
/// 	const MAX:           Self = Self(u128::MAX);
/// 	const MAX_MAGNITUDE: u128 = u128::MAX;
/// 	const MIN_MAGNITUDE: u128 = 0;
/// 
/// 	fn is_negative(self) -> bool { false }
/// 	fn to_wide(self) -> u128 { self.0 }
/// 	fn from_wide(wide: u128) -> Self { Self(wide) }
/// }
/// 
/// let narrow: u8 = cast(Wide(300));
/// ```
/// 
/// The same type declared at exactly 128 bits is accepted:
/// 
/// ```
/// # use core::fmt::{self, Display, Formatter};
/// # use satcast::{FixedInt, cast};
/// #
/// # #[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
/// # struct Wide(u128);
/// #
/// # impl Display for Wide {
/// # 	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
/// # 		write!(f, "{}", self.0)
/// # 	}
/// # }
/// #
/// impl FixedInt for Wide {
/// 	const BITS:          u32  = 128;
/// 	const SIGNED:        bool = false;
/// 	const MIN:           Self = Self(0);
/// 	const MAX:           Self = Self(u128::MAX);
/// 	const MAX_MAGNITUDE: u128 = u128::MAX;
/// 	const MIN_MAGNITUDE: u128 = 0;
/// 
/// 	fn is_negative(self) -> bool { false }
/// 	fn to_wide(self) -> u128 { self.0 }
/// 	fn from_wide(wide: u128) -> Self { Self(wide) }
/// }
/// 
/// let narrow: u8 = cast(Wide(300));
/// assert_eq!(narrow, u8::MAX);
/// ```
/// 
pub const WIDE_BITS: u32 = u128::BITS;



//		Traits																											

//		FixedInt																
/// A fixed-width integer type with statically known bounds.
/// 
/// This is the bound used by [`cast()`](crate::cast()) and
/// [`try_cast()`](crate::try_cast()). It describes an integer purely in terms
/// of its limits and its two's complement bit pattern, so that any two
/// implementors can be compared without relying on either type's native
/// comparison operators.
/// 
/// It is implemented for all the primitive integers:
/// 
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`i128`], [`isize`]
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`u128`], [`usize`]
/// 
/// It can also be implemented for custom fixed-width integers, such as
/// [`u63`](crate::u63), as long as the constants and methods agree with each
/// other: `MIN` and `MAX` must produce `MIN_MAGNITUDE` and `MAX_MAGNITUDE`,
/// and [`to_wide()`](FixedInt::to_wide()) followed by
/// [`from_wide()`](FixedInt::from_wide()) must return the original value.
/// 
pub trait FixedInt: Copy + Debug + Display + Ord + Send + Sync + 'static {
	//		Constants															
	/// Number of value bits, including the sign bit for signed types.
	const BITS:          u32;
	
	/// Whether the type can represent negative values.
	const SIGNED:        bool;
	
	/// The smallest representable value.
	const MIN:           Self;
	
	/// The largest representable value.
	const MAX:           Self;
	
	/// [`MAX`](FixedInt::MAX) in the unsigned comparison domain.
	const MAX_MAGNITUDE: u128;
	
	/// The absolute value of [`MIN`](FixedInt::MIN) in the unsigned
	/// comparison domain. Zero for unsigned types.
	const MIN_MAGNITUDE: u128;
	
	//		is_negative															
	/// Returns `true` if the value is below zero.
	fn is_negative(self) -> bool;
	
	//		to_wide																
	/// Sign-extends the value into the 128-bit comparison domain.
	/// 
	/// The result is the value's two's complement bit pattern, extended to
	/// 128 bits. For non-negative values this is the value itself; for
	/// negative values it is only meaningful when reinterpreted as [`i128`].
	/// 
	fn to_wide(self) -> u128;
	
	//		from_wide															
	/// Keeps the lowest [`BITS`](FixedInt::BITS) bits of `wide`.
	/// 
	/// This is a truncating reinterpretation, the same as an `as` cast between
	/// primitives. Callers are expected to have checked the range already.
	/// 
	/// # Parameters
	/// 
	/// * `wide` - The bit pattern to narrow, as produced by
	///            [`to_wide()`](FixedInt::to_wide()).
	/// 
	fn from_wide(wide: u128) -> Self;
	
	//		to_signed_wide														
	/// Sign-extends the value into the signed 128-bit comparison domain.
	/// 
	/// Only meaningful for signed types, whose whole range fits in [`i128`].
	/// 
	#[expect(clippy::cast_possible_wrap, reason = "Two's complement reinterpretation is intended")]
	fn to_signed_wide(self) -> i128 {
		self.to_wide() as i128
	}
}



//		Macros																											

//		fixed_int!																
/// Implements [`FixedInt`] for primitive integer types.
macro_rules! fixed_int {
	(signed: $($t:ty),*) => {$(
		//󰭅		FixedInt														
		impl FixedInt for $t {
			const BITS:          u32  = <$t>::BITS;
			const SIGNED:        bool = true;
			const MIN:           Self = <$t>::MIN;
			const MAX:           Self = <$t>::MAX;
			#[allow(clippy::cast_sign_loss, clippy::cast_lossless, reason = "MAX is positive")]
			const MAX_MAGNITUDE: u128 = <$t>::MAX as u128;
			#[allow(clippy::cast_lossless, reason = "Widening only")]
			const MIN_MAGNITUDE: u128 = <$t>::MIN.unsigned_abs() as u128;
			
			//		is_negative													
			fn is_negative(self) -> bool {
				self < 0
			}
			
			//		to_wide														
			#[allow(clippy::cast_sign_loss, clippy::cast_lossless, reason = "Sign extension is intended")]
			fn to_wide(self) -> u128 {
				self as u128
			}
			
			//		from_wide													
			#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, reason = "Truncation is intended")]
			fn from_wide(wide: u128) -> Self {
				wide as Self
			}
		}
	)*};
	(unsigned: $($t:ty),*) => {$(
		//󰭅		FixedInt														
		impl FixedInt for $t {
			const BITS:          u32  = <$t>::BITS;
			const SIGNED:        bool = false;
			const MIN:           Self = <$t>::MIN;
			const MAX:           Self = <$t>::MAX;
			#[allow(clippy::cast_lossless, reason = "Widening only")]
			const MAX_MAGNITUDE: u128 = <$t>::MAX as u128;
			const MIN_MAGNITUDE: u128 = 0;
			
			//		is_negative													
			fn is_negative(self) -> bool {
				false
			}
			
			//		to_wide														
			#[allow(clippy::cast_lossless, reason = "Widening only")]
			fn to_wide(self) -> u128 {
				self as u128
			}
			
			//		from_wide													
			#[allow(clippy::cast_possible_truncation, reason = "Truncation is intended")]
			fn from_wide(wide: u128) -> Self {
				wide as Self
			}
		}
	)*};
}

fixed_int!(signed:   i8, i16, i32, i64, i128, isize);
fixed_int!(unsigned: u8, u16, u32, u64, u128, usize);
