// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions shared by the snapping code, backed by std or libm.

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(
            #[inline]
            fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("pixalign requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn ceil(self) -> Self => ceil;
    fn floor(self) -> Self => floor;
    // `rint` rounds half to even under the default rounding mode.
    fn round_ties_even(self) -> Self => rint;
    fn trunc(self) -> Self => trunc;
}

/// The largest integer that `f64` represents exactly along with all smaller ones.
pub(crate) const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Is `value` a whole number small enough to convert to `u64` losslessly?
#[inline]
pub(crate) fn is_exact_integer(value: f64) -> bool {
    value.is_finite() && value.trunc() == value && value.abs() <= MAX_EXACT_INTEGER
}

/// Greatest common divisor by Euclid's algorithm.
pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(32, 18), 2);
        assert_eq!(gcd(18, 32), 2);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(1920, 1080), 120);
    }

    #[test]
    fn exact_integers() {
        assert!(is_exact_integer(16.0));
        assert!(is_exact_integer(-3.0));
        assert!(!is_exact_integer(1.5));
        assert!(!is_exact_integer(f64::INFINITY));
        assert!(!is_exact_integer(f64::NAN));
        assert!(!is_exact_integer(1e300));
    }
}
