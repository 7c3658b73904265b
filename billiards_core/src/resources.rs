use glam::Vec2;
use rand::Rng;

/// Time resource for tracking simulation time
///
/// `dt` is the length of the step being run. For `step` that is the number
/// of reference frames requested; inside a sweep it is the integration step.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,
    pub now: f32,   // Total simulated time
    pub carry: f32, // Part of a frame requested but not yet simulated
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now, carry: 0.0 }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in [lo, hi]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        self.0.gen_range(lo..=hi)
    }

    /// Velocity with independent components in [-max, max]
    pub fn drift(&mut self, max: f32) -> Vec2 {
        Vec2::new(self.range(-max, max), self.range(-max, max))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// A ball that dropped into a pocket this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PocketEvent {
    pub ball: usize,
    pub pocket: usize,
    pub was_cue: bool,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub cushion_hits: u32,
    pub pocketed: Vec<PocketEvent>,
    pub ball_hits: Vec<(usize, usize)>, // (moving ball, other ball)
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cushion_hits = 0;
        self.pocketed.clear();
        self.ball_hits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cushion_hits == 0 && self.pocketed.is_empty() && self.ball_hits.is_empty()
    }
}
