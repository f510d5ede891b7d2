//! Type-I discrete cosine transform on Chebyshev–Gauss–Lobatto grids.
//!
//! With nodes `x_j = cos(π j / M)`, `j = 0..=M`, the DCT-I maps point values
//! of a degree-`M` polynomial to its Chebyshev coefficients and back:
//!
//! ```text
//! f(x_j) = Σ_k c_k cos(π j k / M)
//! c_k    = (2 / M) Σ''_j f(x_j) cos(π j k / M)     (Σ'' halves j = 0, M)
//! ```
//!
//! The FFT-backed kernel evaluates the transform through the even extension
//! of length `2M`, whose spectrum is purely the cosine sum.

use std::f64::consts::PI;

use num_complex::Complex;
use rustfft::{FftNum, FftPlanner};

use crate::traits::Scalar;

/// Returns the Chebyshev–Gauss–Lobatto nodes `cos(π j / m)` for `j = 0..=m`.
///
/// For `m == 0` the single node is `1`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gauss_lobatto_nodes(m: usize) -> Vec<f64> {
    if m == 0 {
        return vec![1.0];
    }
    (0..=m).map(|j| (PI * j as f64 / m as f64).cos()).collect()
}

/// Direct O(n²) DCT-I for any scalar type.
#[allow(clippy::cast_precision_loss)]
pub fn dct_i_direct<T: Scalar>(input: &[T]) -> Vec<T> {
    let n = input.len();
    if n < 2 {
        return input.to_vec();
    }

    let m = n - 1;
    let two = T::from_f64(2.0);

    (0..n)
        .map(|k| {
            let mut acc = if k % 2 == 0 {
                input[0].clone() + input[m].clone()
            } else {
                input[0].clone() - input[m].clone()
            };
            for (j, d) in input.iter().enumerate().take(m).skip(1) {
                // Reduce the phase before scaling so large j*k stay accurate
                let phase = (j * k) % (2 * m);
                let c = T::from_f64((PI * phase as f64 / m as f64).cos());
                acc = acc + two.clone() * c * d.clone();
            }
            acc
        })
        .collect()
}

/// FFT-backed DCT-I over complex data.
///
/// The even extension `[d_0, ..., d_M, d_{M-1}, ..., d_1]` has a real
/// (cosine-only) spectrum, so this works for complex inputs as well.
pub fn dct_i_fft<F: FftNum>(input: &[Complex<F>]) -> Vec<Complex<F>> {
    let n = input.len();
    if n < 2 {
        return input.to_vec();
    }

    let m = n - 1;
    let mut buffer = Vec::with_capacity(2 * m);
    buffer.extend_from_slice(input);
    buffer.extend(input[1..m].iter().rev().copied());

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(2 * m);
    fft.process(&mut buffer);

    buffer.truncate(n);
    buffer
}

/// Recovers Chebyshev coefficients from values at the `M + 1` Lobatto nodes.
///
/// The result is the degree-`M` interpolant, exact for polynomials of
/// degree at most `M`.
pub fn values_to_coefficients<T: Scalar>(values: &[T]) -> Vec<T> {
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }

    let m = n - 1;
    let inv_m = T::one() / T::from_usize(m);
    let half = T::from_f64(0.5);

    let mut coeffs: Vec<T> = T::dct_i(values)
        .into_iter()
        .map(|y| y * inv_m.clone())
        .collect();
    coeffs[0] = coeffs[0].clone() * half.clone();
    coeffs[m] = coeffs[m].clone() * half;
    coeffs
}

/// Evaluates a Chebyshev series of degree `M` at the `M + 1` Lobatto nodes.
pub fn coefficients_to_values<T: Scalar>(coeffs: &[T]) -> Vec<T> {
    let n = coeffs.len();
    if n < 2 {
        return coeffs.to_vec();
    }

    let m = n - 1;
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);

    let mut doubled = coeffs.to_vec();
    doubled[0] = doubled[0].clone() * two.clone();
    doubled[m] = doubled[m].clone() * two;

    T::dct_i(&doubled)
        .into_iter()
        .map(|y| y * half.clone())
        .collect()
}
