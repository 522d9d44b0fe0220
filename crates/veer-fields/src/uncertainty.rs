//! Seeded, smoothed sensing-uncertainty field.
//!
//! Respects the determinism contract: a `ChaCha8Rng` seeded with
//! `seed_from_u64(seed)` fills every cell in row-major order with one
//! uniform `f32` draw in `[0, 1)`. The noise is then box-blurred
//! `passes` times with a square window of half-width `radius`, clipped
//! at the grid edges. Each pass reads a snapshot of the previous one.
//!
//! Identical seeds produce byte-identical fields on every platform.
//!
//! Constructed via the builder pattern: [`UncertaintyField::builder`].

use crate::blur::box_blur;
use crate::context::FieldContext;
use crate::generator::FieldGenerator;
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use veer_core::{FieldError, FieldKind, ScalarField};

/// Smoothed-noise field generator.
#[derive(Clone, Debug)]
pub struct UncertaintyField {
    seed: u64,
    radius: u32,
    passes: u32,
}

/// Builder for [`UncertaintyField`].
pub struct UncertaintyFieldBuilder {
    seed: u64,
    radius: u32,
    passes: u32,
}

impl UncertaintyField {
    /// Seed used when the caller supplies none.
    pub const DEFAULT_SEED: u64 = 123;
    /// Default blur half-width (5×5 window).
    pub const DEFAULT_RADIUS: u32 = 2;
    /// Default number of blur passes.
    pub const DEFAULT_PASSES: u32 = 2;
    /// Largest accepted blur half-width.
    pub const MAX_RADIUS: u32 = 64;

    /// Create a new builder for configuring an `UncertaintyField`.
    pub fn builder() -> UncertaintyFieldBuilder {
        UncertaintyFieldBuilder {
            seed: Self::DEFAULT_SEED,
            radius: Self::DEFAULT_RADIUS,
            passes: Self::DEFAULT_PASSES,
        }
    }

    /// RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Blur half-width.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of blur passes.
    pub fn passes(&self) -> u32 {
        self.passes
    }
}

impl Default for UncertaintyField {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            radius: Self::DEFAULT_RADIUS,
            passes: Self::DEFAULT_PASSES,
        }
    }
}

impl UncertaintyFieldBuilder {
    /// Set the RNG seed (default: 123).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the seed if one was supplied, otherwise keep the default.
    pub fn seed_or_default(self, seed: Option<u64>) -> Self {
        match seed {
            Some(s) => self.seed(s),
            None => self,
        }
    }

    /// Set the blur half-width (default: 2). Must be <= 64.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of blur passes (default: 2).
    pub fn passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }

    /// Build the generator, validating configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `radius` exceeds [`UncertaintyField::MAX_RADIUS`].
    pub fn build(self) -> Result<UncertaintyField, FieldError> {
        if self.radius > UncertaintyField::MAX_RADIUS {
            return Err(FieldError::InvalidParameter {
                field: FieldKind::Uncertainty,
                parameter: "radius",
                reason: format!(
                    "must be <= {}, got {}",
                    UncertaintyField::MAX_RADIUS,
                    self.radius
                ),
            });
        }
        Ok(UncertaintyField {
            seed: self.seed,
            radius: self.radius,
            passes: self.passes,
        })
    }
}

impl FieldGenerator for UncertaintyField {
    fn kind(&self) -> FieldKind {
        FieldKind::Uncertainty
    }

    fn generate(&self, ctx: &FieldContext<'_>) -> ScalarField {
        let geometry = ctx.geometry();
        let (width, height) = (geometry.width(), geometry.height());
        let n = geometry.cell_count();

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let noise: Vec<f32> = (0..n).map(|_| rng.random::<f32>()).collect();

        let smoothed = box_blur(
            noise,
            width as usize,
            height as usize,
            self.radius as usize,
            self.passes,
        );

        trace!(
            "[UncertaintyField] generated {}x{} (seed={}, radius={}, passes={})",
            width,
            height,
            self.seed,
            self.radius,
            self.passes
        );
        ScalarField::from_vec(width, height, smoothed)
            .unwrap_or_else(|| ScalarField::zeros(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use veer_space::{GridGeometry, Occupancy};

    fn generate(w: u32, h: u32, generator: &UncertaintyField) -> ScalarField {
        let occ = Occupancy::open(GridGeometry::new(w, h).unwrap());
        generator.generate(&FieldContext::new(&occ, &[]))
    }

    // ── Builder tests ───────────────────────────────────────────

    #[test]
    fn builder_defaults() {
        let u = UncertaintyField::builder().build().unwrap();
        assert_eq!(u.seed(), 123);
        assert_eq!(u.radius(), 2);
        assert_eq!(u.passes(), 2);
    }

    #[test]
    fn seed_or_default_keeps_default_on_none() {
        let u = UncertaintyField::builder().seed_or_default(None).build().unwrap();
        assert_eq!(u.seed(), UncertaintyField::DEFAULT_SEED);
        let u = UncertaintyField::builder()
            .seed_or_default(Some(7))
            .build()
            .unwrap();
        assert_eq!(u.seed(), 7);
    }

    #[test]
    fn builder_rejects_huge_radius() {
        assert!(UncertaintyField::builder().radius(65).build().is_err());
        assert!(UncertaintyField::builder().radius(64).build().is_ok());
    }

    // ── Determinism tests ───────────────────────────────────────

    #[test]
    fn same_seed_is_bit_identical() {
        let generator = UncertaintyField::builder().seed(42).build().unwrap();
        let a = generate(16, 12, &generator);
        let b = generate(16, 12, &generator);
        let bits_a: Vec<u32> = a.as_slice().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u32> = b.as_slice().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(8, 8, &UncertaintyField::builder().seed(1).build().unwrap());
        let b = generate(8, 8, &UncertaintyField::builder().seed(2).build().unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn zero_passes_is_raw_noise() {
        let generator = UncertaintyField::builder().seed(9).passes(0).build().unwrap();
        let f = generate(4, 3, &generator);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for &v in f.as_slice() {
            assert_eq!(v, rng.random::<f32>());
        }
    }

    #[test]
    fn smoothing_reduces_spread() {
        let raw = generate(20, 20, &UncertaintyField::builder().passes(0).build().unwrap());
        let smooth = generate(20, 20, &UncertaintyField::default());
        let spread = |f: &ScalarField| {
            let s = f.as_slice();
            let lo = s.iter().copied().fold(f32::INFINITY, f32::min);
            let hi = s.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            hi - lo
        };
        assert!(spread(&smooth) < spread(&raw));
    }

    proptest! {
        #[test]
        fn values_in_unit_interval(
            w in 1u32..16,
            h in 1u32..16,
            seed in any::<u64>(),
        ) {
            let f = generate(w, h, &UncertaintyField::builder().seed(seed).build().unwrap());
            prop_assert_eq!(f.len(), (w * h) as usize);
            for &v in f.as_slice() {
                prop_assert!(v.is_finite());
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
