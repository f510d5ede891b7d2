//! Property-based tests for expansion arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::MulStrategy;
    use crate::expansion::Expansion;

    const NVAR: usize = 2;
    const DEGREE: usize = 4;
    // binomial(DEGREE + NVAR, NVAR)
    const LEN: usize = 15;

    // Integer-valued coefficients keep additive identities exact
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-8i32..8i32).prop_map(f64::from)
    }

    fn small_expansion() -> impl Strategy<Value = Expansion<f64>> {
        proptest::collection::vec(small_coeff(), LEN)
            .prop_map(|c| Expansion::from_coefficients(NVAR, DEGREE, c).unwrap())
    }

    // Expansions of total degree at most 2, whose products are not truncated
    fn low_degree_expansion() -> impl Strategy<Value = Expansion<f64>> {
        proptest::collection::vec(small_coeff(), 6).prop_map(|mut c| {
            c.resize(LEN, 0.0);
            Expansion::from_coefficients(NVAR, DEGREE, c).unwrap()
        })
    }

    fn point() -> impl Strategy<Value = [f64; 2]> {
        (-1.0f64..=1.0, -1.0f64..=1.0).prop_map(|(x, y)| [x, y])
    }

    // Coefficient-wise agreement relative to the larger norm
    fn close(a: &Expansion<f64>, b: &Expansion<f64>, tol: f64) -> bool {
        let scale = 1.0 + a.norm().max(b.norm());
        a.coefficients()
            .iter()
            .zip(b.coefficients())
            .all(|(x, y)| (x - y).abs() <= tol * scale)
    }

    proptest! {
        // Ring laws

        #[test]
        fn add_commutative(a in small_expansion(), b in small_expansion()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_expansion(), b in small_expansion(), c in small_expansion()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn add_identity(a in small_expansion()) {
            prop_assert_eq!(&a + &a.zeros_like(), a.clone());
        }

        #[test]
        fn sub_self_is_zero(a in small_expansion()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn mul_commutative(a in small_expansion(), b in small_expansion()) {
            let ab = a.direct_multiplication(&b).unwrap();
            let ba = b.direct_multiplication(&a).unwrap();
            prop_assert!(close(&ab, &ba, 1e-12));
        }

        #[test]
        fn mul_identity(a in small_expansion()) {
            let one = a.constant_like(1.0);
            prop_assert_eq!(a.direct_multiplication(&one).unwrap(), a.clone());
        }

        #[test]
        fn distributive(a in small_expansion(), b in small_expansion(), c in small_expansion()) {
            let left = a.direct_multiplication(&(&b + &c)).unwrap();
            let right = &a.direct_multiplication(&b).unwrap() + &a.direct_multiplication(&c).unwrap();
            prop_assert!(close(&left, &right, 1e-12));
        }

        // Strategies

        #[test]
        fn direct_matches_transform(a in small_expansion(), b in small_expansion()) {
            let direct = a.multiply_with(&b, MulStrategy::Direct).unwrap();
            let transform = a.multiply_with(&b, MulStrategy::Transform).unwrap();
            prop_assert!(close(&direct, &transform, 1e-10));
        }

        // Evaluation

        #[test]
        fn evaluation_is_linear(a in small_expansion(), b in small_expansion(), p in point()) {
            let sum = (&a + &b).evaluate(&p).unwrap();
            let expected = a.evaluate(&p).unwrap() + b.evaluate(&p).unwrap();
            prop_assert!((sum - expected).abs() <= 1e-10);
        }

        #[test]
        fn evaluation_respects_products(
            a in low_degree_expansion(),
            b in low_degree_expansion(),
            p in point()
        ) {
            let ab = a.direct_multiplication(&b).unwrap().evaluate(&p).unwrap();
            let expected = a.evaluate(&p).unwrap() * b.evaluate(&p).unwrap();
            prop_assert!((ab - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
        }

        #[test]
        fn composition_with_variables_is_identity(a in small_expansion()) {
            let vars = [
                Expansion::variable(NVAR, DEGREE, 0).unwrap(),
                Expansion::variable(NVAR, DEGREE, 1).unwrap(),
            ];
            let composed = a.composition_with(&vars, MulStrategy::Direct).unwrap();
            prop_assert!(close(&composed, &a, 1e-12));
        }

        // Division

        #[test]
        fn division_is_left_inverse(
            a in proptest::collection::vec(-1.0f64..1.0, 4),
            c1 in -1.0f64..1.0
        ) {
            let mut coeffs = a;
            coeffs.resize(13, 0.0);
            let a = Expansion::from_coefficients(1, 12, coeffs).unwrap();

            let mut divisor = Expansion::constant(1, 12, 4.0).unwrap();
            divisor.set_coefficient(1, c1).unwrap();

            let quotient = a.try_mul(&divisor).unwrap().try_div(&divisor).unwrap();
            prop_assert!(close(&quotient, &a, 1e-8));
        }
    }
}
