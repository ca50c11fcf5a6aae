//! Builder for configuring [`TreeSampler`] instances.
//!
//! Exposes the extra-edge budget and RNG seeding surface used before
//! sampling. The counts are unsigned, so the configuration cannot express a
//! negative edge request and `build` is infallible.

use crate::sampler::TreeSampler;

/// Configures and constructs [`TreeSampler`] instances.
///
/// # Examples
/// ```
/// use ramita_core::SamplerBuilder;
///
/// let sampler = SamplerBuilder::new()
///     .with_extra_edges(3)
///     .with_seed(42)
///     .build();
/// assert_eq!(sampler.extra_edges(), 3);
/// assert_eq!(sampler.seed(), Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SamplerBuilder {
    extra_edges: usize,
    seed: Option<u64>,
}

impl SamplerBuilder {
    /// Creates a builder populated with default parameters: no extra edges
    /// and an entropy-seeded generator.
    ///
    /// # Examples
    /// ```
    /// use ramita_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new();
    /// assert_eq!(builder.extra_edges(), 0);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many extra edges to add on top of the spanning tree.
    ///
    /// Requests exceeding the capacity of the source graph are clamped at
    /// sampling time, never rejected.
    #[must_use]
    pub const fn with_extra_edges(mut self, extra_edges: usize) -> Self {
        self.extra_edges = extra_edges;
        self
    }

    /// Returns the configured extra-edge request.
    #[must_use]
    pub const fn extra_edges(&self) -> usize {
        self.extra_edges
    }

    /// Fixes the RNG seed so repeated samples reproduce byte-identically.
    ///
    /// # Examples
    /// ```
    /// use ramita_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new().with_seed(7);
    /// assert_eq!(builder.seed(), Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Constructs a [`TreeSampler`] from the configuration.
    ///
    /// # Examples
    /// ```
    /// use ramita_core::SamplerBuilder;
    ///
    /// let sampler = SamplerBuilder::new().build();
    /// assert_eq!(sampler.extra_edges(), 0);
    /// ```
    #[must_use]
    pub const fn build(self) -> TreeSampler {
        TreeSampler::new(self.extra_edges, self.seed)
    }
}
