use glam::Vec2;

use crate::{Params, Pocket, SimError};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Corners counter-clockwise starting at `min`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// Check if a circle pokes past the left or right edge
    pub fn circle_outside_x(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius < self.min.x || center.x + radius > self.max.x
    }

    /// Check if a circle pokes past the top or bottom edge
    pub fn circle_outside_y(&self, center: Vec2, radius: f32) -> bool {
        center.y - radius < self.min.y || center.y + radius > self.max.y
    }
}

/// Static table layout: playing surface bounds and pockets
#[derive(Debug, Clone)]
pub struct Table {
    pub bounds: Aabb,
    pub pockets: Vec<Pocket>,
}

impl Table {
    /// Build a table spanning `[0, width] x [0, height]`
    pub fn new(width: f32, height: f32, pockets: Vec<Pocket>) -> Result<Self, SimError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(SimError::InvalidTable { width, height });
        }
        for (index, pocket) in pockets.iter().enumerate() {
            if !pocket.pos.is_finite() || !pocket.radius.is_finite() || pocket.radius <= 0.0 {
                return Err(SimError::InvalidPocket { index });
            }
        }

        Ok(Self {
            bounds: Aabb::new(Vec2::ZERO, Vec2::new(width, height)),
            pockets,
        })
    }

    /// Table of the given size with a pocket in each corner
    pub fn with_corner_pockets(width: f32, height: f32) -> Result<Self, SimError> {
        Self::new(width, height, corner_pockets(width, height))
    }

    /// Standard 84x56 table with a pocket in each corner
    pub fn standard() -> Self {
        Self {
            bounds: Aabb::new(
                Vec2::ZERO,
                Vec2::new(Params::TABLE_WIDTH, Params::TABLE_HEIGHT),
            ),
            pockets: corner_pockets(Params::TABLE_WIDTH, Params::TABLE_HEIGHT),
        }
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Outline of the playing surface
    pub fn vertices(&self) -> [Vec2; 4] {
        self.bounds.corners()
    }
}

/// Corner pockets in table order: (min, min), (max, min), (max, max), (min, max)
pub fn corner_pockets(width: f32, height: f32) -> Vec<Pocket> {
    let r = Params::POCKET_RADIUS;
    [
        Vec2::new(r, r),
        Vec2::new(width - r, r),
        Vec2::new(width - r, height - r),
        Vec2::new(r, height - r),
    ]
    .into_iter()
    .map(|pos| Pocket::new(pos, r))
    .collect()
}

impl Default for Table {
    fn default() -> Self {
        Self::standard()
    }
}
