//! Operator overloads for expansions.
//!
//! The operators wrap the fallible `try_*` methods and panic on error, so
//! they are meant for operands already known to share a shape.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use polycheb_scalar::Scalar;

use crate::expansion::Expansion;

macro_rules! impl_binary_op {
    ($Trait:ident, $method:ident, $try_method:ident) => {
        impl<T: Scalar> $Trait<&Expansion<T>> for &Expansion<T> {
            type Output = Expansion<T>;

            /// # Panics
            ///
            /// Panics if the operands differ in shape, or if the operation
            /// itself fails.
            fn $method(self, rhs: &Expansion<T>) -> Expansion<T> {
                self.$try_method(rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<T: Scalar> $Trait<Expansion<T>> for Expansion<T> {
            type Output = Expansion<T>;

            fn $method(self, rhs: Expansion<T>) -> Expansion<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $Trait<&Expansion<T>> for Expansion<T> {
            type Output = Expansion<T>;

            fn $method(self, rhs: &Expansion<T>) -> Expansion<T> {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $Trait<Expansion<T>> for &Expansion<T> {
            type Output = Expansion<T>;

            fn $method(self, rhs: Expansion<T>) -> Expansion<T> {
                self.$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);
impl_binary_op!(Div, div, try_div);

macro_rules! impl_scalar_op {
    ($Trait:ident, $method:ident, |$e:ident, $s:ident| $body:expr) => {
        impl<T: Scalar> $Trait<T> for &Expansion<T> {
            type Output = Expansion<T>;

            fn $method(self, rhs: T) -> Expansion<T> {
                let ($e, $s) = (self, rhs);
                $body
            }
        }

        impl<T: Scalar> $Trait<T> for Expansion<T> {
            type Output = Expansion<T>;

            fn $method(self, rhs: T) -> Expansion<T> {
                (&self).$method(rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add, |e, s| e.add_scalar(s));
impl_scalar_op!(Sub, sub, |e, s| e.sub_scalar(s));
impl_scalar_op!(Mul, mul, |e, s| e.scale(&s));
impl_scalar_op!(Div, div, |e, s| e
    .try_div_scalar(&s)
    .unwrap_or_else(|err| panic!("{err}")));

impl<T: Scalar> Neg for Expansion<T> {
    type Output = Expansion<T>;

    fn neg(self) -> Expansion<T> {
        Expansion::neg(&self)
    }
}

impl<T: Scalar> Neg for &Expansion<T> {
    type Output = Expansion<T>;

    fn neg(self) -> Expansion<T> {
        Expansion::neg(self)
    }
}

macro_rules! impl_assign_op {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $Trait<Expansion<T>> for Expansion<T> {
            fn $method(&mut self, rhs: Expansion<T>) {
                *self = &*self $op &rhs;
            }
        }

        impl<T: Scalar> $Trait<&Expansion<T>> for Expansion<T> {
            fn $method(&mut self, rhs: &Expansion<T>) {
                *self = &*self $op rhs;
            }
        }

        impl<T: Scalar> $Trait<T> for Expansion<T> {
            fn $method(&mut self, rhs: T) {
                *self = &*self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

/// Operators with a primitive float on the left.
macro_rules! impl_left_scalar_ops {
    ($($t:ty),*) => {$(
        impl Add<Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            fn add(self, rhs: Expansion<$t>) -> Expansion<$t> {
                rhs.add_scalar(self)
            }
        }

        impl Add<&Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            fn add(self, rhs: &Expansion<$t>) -> Expansion<$t> {
                rhs.add_scalar(self)
            }
        }

        impl Sub<Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            fn sub(self, rhs: Expansion<$t>) -> Expansion<$t> {
                rhs.neg().add_scalar(self)
            }
        }

        impl Sub<&Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            fn sub(self, rhs: &Expansion<$t>) -> Expansion<$t> {
                rhs.neg().add_scalar(self)
            }
        }

        impl Mul<Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            fn mul(self, rhs: Expansion<$t>) -> Expansion<$t> {
                rhs.scale(&self)
            }
        }

        impl Mul<&Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            fn mul(self, rhs: &Expansion<$t>) -> Expansion<$t> {
                rhs.scale(&self)
            }
        }

        impl Div<Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            /// # Panics
            ///
            /// Panics if `rhs` cannot be inverted.
            fn div(self, rhs: Expansion<$t>) -> Expansion<$t> {
                self / &rhs
            }
        }

        impl Div<&Expansion<$t>> for $t {
            type Output = Expansion<$t>;

            fn div(self, rhs: &Expansion<$t>) -> Expansion<$t> {
                rhs.inverse()
                    .unwrap_or_else(|e| panic!("{e}"))
                    .scale(&self)
            }
        }
    )*};
}

impl_left_scalar_ops!(f32, f64);

/// Operators with an integer literal on the left, for any coefficient type.
macro_rules! impl_int_left_op {
    ($Trait:ident, $method:ident, |$s:ident, $e:ident| $body:expr) => {
        impl<T: Scalar> $Trait<Expansion<T>> for i32 {
            type Output = Expansion<T>;

            fn $method(self, rhs: Expansion<T>) -> Expansion<T> {
                $Trait::$method(self, &rhs)
            }
        }

        impl<T: Scalar> $Trait<&Expansion<T>> for i32 {
            type Output = Expansion<T>;

            fn $method(self, rhs: &Expansion<T>) -> Expansion<T> {
                let ($s, $e) = (T::from_f64(f64::from(self)), rhs);
                $body
            }
        }
    };
}

impl_int_left_op!(Add, add, |s, e| e.add_scalar(s));
impl_int_left_op!(Sub, sub, |s, e| e.neg().add_scalar(s));
impl_int_left_op!(Mul, mul, |s, e| e.scale(&s));
impl_int_left_op!(Div, div, |s, e| e
    .inverse()
    .unwrap_or_else(|err| panic!("{err}"))
    .scale(&s));

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    fn x() -> Expansion<f64> {
        Expansion::variable(1, 4, 0).unwrap()
    }

    #[test]
    fn test_binary_forms_agree() {
        let a = x() + 1.0;
        let b = x() * 2.0 - 3.0;

        let owned = a.clone() * b.clone();
        assert_eq!(&a * &b, owned);
        assert_eq!(a.clone() * &b, owned);
        assert_eq!(&a * b.clone(), owned);
    }

    #[test]
    fn test_left_scalars() {
        let e = x();
        assert_eq!(2.0_f64 * &e, e.scale(&2.0));
        assert_eq!(1.0_f64 + &e, e.add_scalar(1.0));
        assert_eq!(1.0_f64 - &e, -&e + 1.0);

        // (1 / (4 + x)) · (4 + x) ≈ 1
        let d = 4.0_f64 + e;
        let one = (1.0_f64 / &d) * &d;
        assert_abs_diff_eq!(one.coefficients()[0], 1.0, epsilon = 1e-3);
        for c in &one.coefficients()[1..] {
            assert_abs_diff_eq!(*c, 0.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_integer_left_scalars() {
        let e = x();
        assert_eq!(2 * &e, e.scale(&2.0));
        assert_eq!(3 + e.clone(), e.add_scalar(3.0));
        assert_eq!(1 - &e, 1.0_f64 - &e);
        assert_eq!(1 / (x() + 4.0), 1.0_f64 / (x() + 4.0));

        let z = Expansion::<Complex64>::variable(1, 2, 0).unwrap();
        assert_eq!(2 * &z, z.scale(&Complex64::new(2.0, 0.0)));
    }

    #[test]
    fn test_assign_ops() {
        let mut e = x();
        e += 1.0;
        e *= 2.0;
        e -= &x();
        assert_eq!(e.coefficients(), &[2.0, 1.0, 0.0, 0.0, 0.0]);

        e /= 2.0;
        assert_eq!(e.coefficients(), &[1.0, 0.5, 0.0, 0.0, 0.0]);

        let mut sq = x();
        sq *= x();
        for (c, e) in sq.coefficients().iter().zip([0.5, 0.0, 0.5, 0.0, 0.0]) {
            assert_abs_diff_eq!(*c, e, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_neg() {
        let e = x() + 2.0;
        assert_eq!((-e.clone()).coefficients(), &[-2.0, -1.0, 0.0, 0.0, 0.0]);
        assert!((&e + -&e).is_zero());
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_mismatched_operands_panic() {
        let a = Expansion::<f64>::new(1, 3).unwrap();
        let b = Expansion::<f64>::new(2, 3).unwrap();
        let _ = a + b;
    }
}
