//! Saturating and fallible conversions between fixed-width integers.
//!
//! The central operation is [`cast()`], which converts a value of any
//! [`FixedInt`] type into any other, clamping to the destination's bounds
//! where the value does not fit. Unlike an `as` cast, it never truncates or
//! reinterprets the sign:
//!
//! ```
//! use satcast::cast;
//!
//! assert_eq!(cast::<u16, i32>(1_234_567_890), 65_535);
//! assert_eq!(cast::<u32, i32>(-1),            0);
//! assert_eq!(cast::<i8,  u32>(300),           127);
//! ```
//!
//! Whether a pair of types needs a range check at all is decided at compile
//! time by [`is_lossless()`]. Pairs where the destination covers the whole
//! source range compile down to a plain widening conversion.
//!
//! [`try_cast()`] runs the same decision but reports values that do not fit
//! as a [`ConversionError`] instead of clamping them.
//!



//		Modules																											

#[cfg(test)]
#[path = "tests/cast.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	int::{FixedInt, WIDE_BITS},
};
use core::marker::PhantomData;



//		Enums																											

//		Placement																
/// Where a value falls relative to the destination type's range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Placement {
	/// Below the destination's minimum.
	Below,
	
	/// Representable in the destination.
	Within,
	
	/// Above the destination's maximum.
	Above,
}



//		Structs																											

//		Gate																	
/// Compile-time facts about converting from `T` to `D`.
struct Gate<D, T>(PhantomData<(D, T)>);

//󰭅		Gate																	
impl<D: FixedInt, T: FixedInt> Gate<D, T> {
	/// Whether every value of `T` is representable in `D`.
	/// 
	/// Evaluating this fails monomorphisation for types wider than the
	/// comparison domain.
	/// 
	const LOSSLESS: bool = {
		assert!(
			D::BITS <= WIDE_BITS && T::BITS <= WIDE_BITS,
			"Integer types wider than 128 bits cannot be cast",
		);
		is_lossless::<D, T>()
	};
}



//		Traits																											

//		SaturatingFrom															
/// Saturating conversion from `T`.
/// 
/// This is implemented for every pair of [`FixedInt`] types, and is the
/// trait form of [`cast()`].
/// 
pub trait SaturatingFrom<T>: Sized {
	//		saturating_from														
	/// Converts `value`, clamping it to the bounds of `Self`.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to convert.
	/// 
	#[must_use]
	fn saturating_from(value: T) -> Self;
}

//		SaturatingInto															
/// Saturating conversion into `D`.
/// 
/// The counterpart to [`SaturatingFrom`], in the same way that [`Into`] is
/// the counterpart to [`From`]. It should not be implemented directly.
/// 
pub trait SaturatingInto<D> {
	//		saturating_into														
	/// Converts `self`, clamping it to the bounds of `D`.
	#[must_use]
	fn saturating_into(self) -> D;
}

//󰭅		SaturatingFrom															
impl<D: FixedInt, T: FixedInt> SaturatingFrom<T> for D {
	//		saturating_from														
	#[inline]
	fn saturating_from(value: T) -> Self {
		cast(value)
	}
}

//󰭅		SaturatingInto															
impl<D, T> SaturatingInto<D> for T
where
	D: SaturatingFrom<T>,
{
	//		saturating_into														
	#[inline]
	fn saturating_into(self) -> D {
		D::saturating_from(self)
	}
}



//		Functions																										

//		is_lossless																
/// Whether every value of `T` can be represented in `D`.
/// 
/// This is the compile-time gate used by [`cast()`] and [`try_cast()`]. It
/// holds when `T::MAX <= D::MAX` and `T::MIN >= D::MIN`, with both sides
/// compared by magnitude so that no signed and unsigned values are ever
/// compared directly.
/// 
/// Pairs involving [`usize`] or [`isize`] depend on the target's pointer
/// width, and the answer is correct for the platform being compiled for.
/// 
#[must_use]
pub const fn is_lossless<D: FixedInt, T: FixedInt>() -> bool {
	T::MAX_MAGNITUDE <= D::MAX_MAGNITUDE && T::MIN_MAGNITUDE <= D::MIN_MAGNITUDE
}

//		cast																	
/// Converts a value between integer types, saturating at the bounds.
/// 
/// Returns `value` unchanged if it is representable in `D`, [`D::MIN`] if it
/// is below the destination's range, and [`D::MAX`] if it is above it. There
/// is no failure case.
/// 
/// When [`is_lossless::<D, T>()`](is_lossless()) holds, no range check is
/// performed at all and this is equivalent to a widening `as` cast.
/// 
/// # Parameters
/// 
/// * `value` - The value to convert.
/// 
/// # Examples
/// 
/// ```
/// use satcast::cast;
/// 
/// assert_eq!(cast::<i8, i32>(100),    100);
/// assert_eq!(cast::<i32, u16>(65_535), 65_535);
/// assert_eq!(cast::<u8, i8>(-5),       0);
/// ```
/// 
/// [`D::MIN`]: FixedInt::MIN
/// [`D::MAX`]: FixedInt::MAX
/// 
#[inline]
#[must_use]
pub fn cast<D: FixedInt, T: FixedInt>(value: T) -> D {
	if Gate::<D, T>::LOSSLESS {
		return D::from_wide(value.to_wide());
	}
	match place::<D, T>(value) {
		Placement::Below  => D::MIN,
		Placement::Within => D::from_wide(value.to_wide()),
		Placement::Above  => D::MAX,
	}
}

//		try_cast																
/// Converts a value between integer types, failing if it does not fit.
/// 
/// This is the fallible counterpart to [`cast()`]. It succeeds exactly when
/// [`cast()`] would return the value unchanged.
/// 
/// # Parameters
/// 
/// * `value` - The value to convert.
/// 
/// # Errors
/// 
///   - [`ConversionError::ValueIsNegative`] if the value is negative and `D`
///     is unsigned.
///   - [`ConversionError::ValueTooSmall`] if the value is below the minimum of
///     a signed `D`.
///   - [`ConversionError::ValueTooLarge`] if the value is above `D::MAX`.
/// 
/// # Examples
/// 
/// ```
/// use satcast::{ConversionError, try_cast};
/// 
/// assert_eq!(try_cast::<u8, i32>(200),  Ok(200));
/// assert_eq!(try_cast::<u8, i32>(-1),   Err(ConversionError::ValueIsNegative));
/// assert_eq!(try_cast::<i8, i32>(-200), Err(ConversionError::ValueTooSmall));
/// assert_eq!(try_cast::<u8, i32>(256),  Err(ConversionError::ValueTooLarge));
/// ```
/// 
#[inline]
pub fn try_cast<D: FixedInt, T: FixedInt>(value: T) -> Result<D, ConversionError> {
	if Gate::<D, T>::LOSSLESS {
		return Ok(D::from_wide(value.to_wide()));
	}
	match place::<D, T>(value) {
		Placement::Below if value.is_negative() && !D::SIGNED => Err(ConversionError::ValueIsNegative),
		Placement::Below  => Err(ConversionError::ValueTooSmall),
		Placement::Within => Ok(D::from_wide(value.to_wide())),
		Placement::Above  => Err(ConversionError::ValueTooLarge),
	}
}

//		place																	
/// Works out where `value` falls relative to the range of `D`.
/// 
/// Values of the same signedness are compared in the common domain of that
/// signedness. Across signedness, negative values are settled first, and the
/// remainder is compared in the unsigned domain, so the two sides are never
/// compared at their native widths.
/// 
fn place<D: FixedInt, T: FixedInt>(value: T) -> Placement {
	if T::SIGNED == D::SIGNED {
		if T::SIGNED {
			let wide = value.to_signed_wide();
			if wide < D::MIN.to_signed_wide() {
				Placement::Below
			} else if wide > D::MAX.to_signed_wide() {
				Placement::Above
			} else {
				Placement::Within
			}
		} else {
			let wide = value.to_wide();
			if wide < D::MIN.to_wide() {
				Placement::Below
			} else if wide > D::MAX_MAGNITUDE {
				Placement::Above
			} else {
				Placement::Within
			}
		}
	} else if value.is_negative() {
		//	Signedness differs, so D is unsigned and starts at zero
		Placement::Below
	} else if T::MAX_MAGNITUDE > D::MAX_MAGNITUDE && value.to_wide() > D::MAX_MAGNITUDE {
		Placement::Above
	} else {
		Placement::Within
	}
}
