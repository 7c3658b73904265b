use billiards_core::{render, Config, Simulation};

use crate::mesh::DrawList;

/// Host frame length the physics constants are tuned for
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;

/// A table running in the browser: simulation plus this frame's geometry
pub struct LocalTable {
    pub sim: Simulation,
    pub draw_list: DrawList,
}

impl LocalTable {
    pub fn new(seed: u64) -> Result<Self, String> {
        let sim = Simulation::new(Config::new(), seed).map_err(|e| e.to_string())?;
        let mut draw_list = DrawList::new();
        render(&mut draw_list, &sim);
        Ok(Self { sim, draw_list })
    }

    /// One fixed frame, then rebuild the geometry
    pub fn frame(&mut self) {
        self.sim.tick();
        self.redraw();
    }

    /// Step by wall-clock time since the last frame
    pub fn advance_ms(&mut self, elapsed_ms: f32) {
        self.sim.advance(elapsed_ms / REFERENCE_FRAME_MS);
        self.redraw();
    }

    fn redraw(&mut self) {
        render(&mut self.draw_list, &self.sim);

        let events = self.sim.events();
        for pocketed in &events.pocketed {
            log::debug!(
                "ball {} dropped into pocket {}",
                pocketed.ball,
                pocketed.pocket
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::CIRCLE_SEGMENTS;

    #[test]
    fn test_new_table_is_drawn_before_first_frame() {
        let table = LocalTable::new(1).unwrap();
        assert_eq!(table.draw_list.triangles.len(), 6);
        assert_eq!(table.draw_list.lines.len(), (4 + 16) * CIRCLE_SEGMENTS * 2);
    }

    #[test]
    fn test_frame_moves_the_cue_ball() {
        let mut table = LocalTable::new(1).unwrap();
        let before = table.sim.balls().cue_ball().unwrap().pos;
        table.frame();
        assert_ne!(table.sim.balls().cue_ball().unwrap().pos, before);
        assert_eq!(table.sim.time().now, 1.0);
    }

    #[test]
    fn test_frame_is_one_fixed_tick() {
        let mut table = LocalTable::new(5).unwrap();
        let mut sim = Simulation::new(Config::new(), 5).unwrap();

        for _ in 0..200 {
            table.frame();
            sim.tick();
        }

        assert_eq!(table.sim.balls().as_slice(), sim.balls().as_slice());
        assert_eq!(table.sim.time().carry, 0.0);
    }

    #[test]
    fn test_uneven_frame_times_carry_the_remainder() {
        let mut table = LocalTable::new(1).unwrap();

        // one frame a quarter late, then one a quarter early
        table.advance_ms(REFERENCE_FRAME_MS * 1.25);
        assert_eq!(table.sim.time().now, 1.0);
        assert!((table.sim.time().carry - 0.25).abs() < 1e-4);

        table.advance_ms(REFERENCE_FRAME_MS * 0.75);
        let time = table.sim.time();
        assert!((time.now + time.carry - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_advance_ms_scales_by_reference_frame() {
        let mut table = LocalTable::new(1).unwrap();
        table.advance_ms(REFERENCE_FRAME_MS * 2.0);
        assert!((table.sim.time().now - 2.0).abs() < 1e-4);

        // a hidden tab can hand us seconds at once
        table.advance_ms(5000.0);
        assert!((table.sim.time().now - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_geometry_size_is_stable_across_frames() {
        let mut table = LocalTable::new(9).unwrap();
        for _ in 0..120 {
            table.frame();
        }
        assert_eq!(table.draw_list.triangles.len(), 6);
        assert_eq!(table.draw_list.lines.len(), (4 + 16) * CIRCLE_SEGMENTS * 2);
    }
}
