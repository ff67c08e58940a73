//! Decorative hero particles

/// Particles injected into the hero section
pub const PARTICLE_COUNT: usize = 50;

/// Shortest float animation (s)
pub const MIN_DURATION_S: f64 = 5.0;

/// Random extra on top of the shortest float animation (s)
pub const DURATION_SPREAD_S: f64 = 10.0;

/// Longest start delay (s)
pub const MAX_DELAY_S: f64 = 5.0;

/// Source of uniform random numbers in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Placement and timing of one particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position, percent of the container
    pub left_pct: f64,
    /// Vertical position, percent of the container
    pub top_pct: f64,
    /// Float animation duration (s)
    pub duration_s: f64,
    /// Animation start delay (s)
    pub delay_s: f64,
}

impl ParticleSpec {
    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self {
            left_pct: rng.next_unit() * 100.0,
            top_pct: rng.next_unit() * 100.0,
            duration_s: MIN_DURATION_S + rng.next_unit() * DURATION_SPREAD_S,
            delay_s: rng.next_unit() * MAX_DELAY_S,
        }
    }

    /// Inline style for the particle element
    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: 2px; height: 2px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; \
             pointer-events: none; left: {}%; top: {}%; \
             animation: float {}s ease-in-out infinite; animation-delay: {}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Generate the full particle field
pub fn generate(rng: &mut impl RandomSource) -> Vec<ParticleSpec> {
    (0..PARTICLE_COUNT).map(|_| ParticleSpec::random(rng)).collect()
}
