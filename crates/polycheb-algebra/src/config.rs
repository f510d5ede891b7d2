//! Run-time configuration of the numerical kernels.

/// Strategy used to multiply two expansions.
///
/// Both strategies compute the same truncated product up to rounding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MulStrategy {
    /// Accumulates coefficient pairs through the product table. O(N²).
    #[cfg_attr(not(feature = "dct-multiplication"), default)]
    Direct,

    /// Multiplies point values on a Chebyshev–Gauss–Lobatto grid that
    /// resolves the full product, then transforms back.
    #[cfg_attr(feature = "dct-multiplication", default)]
    Transform,
}

impl MulStrategy {
    /// Returns a short name for the strategy.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MulStrategy::Direct => "direct",
            MulStrategy::Transform => "transform",
        }
    }
}

impl std::fmt::Display for MulStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configuration for Newton inversion.
#[derive(Clone, Debug)]
pub struct NewtonConfig {
    /// Upper bound on refinement steps.
    pub max_iterations: usize,
    /// Stop once the residual norm `Σ|1 - x·y|` drops below this.
    pub tolerance: f64,
    /// Multiplication used inside the iteration.
    pub strategy: MulStrategy,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            tolerance: 1e-14,
            strategy: MulStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_follows_feature() {
        if cfg!(feature = "dct-multiplication") {
            assert_eq!(MulStrategy::default(), MulStrategy::Transform);
        } else {
            assert_eq!(MulStrategy::default(), MulStrategy::Direct);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(MulStrategy::Direct.to_string(), "direct");
        assert_eq!(MulStrategy::Transform.to_string(), "transform");
    }
}
