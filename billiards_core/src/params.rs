use glam::Vec2;

/// Tuning parameters for the billiards table
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 84.0;
    pub const TABLE_HEIGHT: f32 = 56.0;

    // Pockets sit in the corners, inset by their radius
    pub const POCKET_RADIUS: f32 = 2.0;

    // Balls
    pub const BALL_RADIUS: f32 = 1.0;
    pub const RANDOM_BALL_COUNT: usize = 12;
    pub const RANDOM_SPREAD_X: f32 = 0.7; // fraction of table width
    pub const RANDOM_SPREAD_Y: f32 = 0.8; // fraction of table height
    pub const RANDOM_SPEED: f32 = 0.5; // per component, symmetric

    // Opening layout
    pub const CUE_SPAWN: Vec2 = Vec2::new(70.0, 28.0);
    pub const CUE_VELOCITY: Vec2 = Vec2::new(-2.0, 1.0);
    pub const FRONT_BALLS: [(Vec2, Vec2); 3] = [
        (Vec2::new(40.0, 28.0), Vec2::new(1.0, 0.0)),
        (Vec2::new(42.0, 27.0), Vec2::new(1.0, 0.5)),
        (Vec2::new(42.0, 29.0), Vec2::new(1.0, -0.5)),
    ];

    // Where a pocketed object ball comes back
    pub const OBJECT_RESPAWN: Vec2 = Vec2::new(60.0, 28.0);

    // Physics
    pub const DRAG_COEFFICIENT: f32 = 0.05; // fraction of velocity lost per frame
    pub const TIME_STEP: f32 = 1.0; // one reference frame
    pub const MAX_TIME_STEP: f32 = 1.0; // longest integration step per frame
    pub const MAX_FRAMES: f32 = 6.0; // frames simulated per call, at most
}
