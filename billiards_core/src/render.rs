//! Render adapter contract
//!
//! The simulation never talks to a graphics API. A host implements
//! [`Renderer`] and calls [`render`] once per frame after stepping.

use glam::Vec2;

use crate::Simulation;

/// Drawing capability the simulation needs from a host
pub trait Renderer {
    /// Start a new frame
    fn clear(&mut self);

    /// Filled convex polygon in world units
    fn draw_polygon(&mut self, vertices: &[Vec2]);

    /// Stroked circle in world units
    fn draw_circle_outline(&mut self, center: Vec2, radius: f32);
}

/// Draw the current state: table, then pockets, then balls
pub fn render<R: Renderer + ?Sized>(renderer: &mut R, sim: &Simulation) {
    renderer.clear();

    let table = sim.table();
    renderer.draw_polygon(&table.vertices());

    for pocket in &table.pockets {
        renderer.draw_circle_outline(pocket.pos, pocket.radius);
    }

    for ball in sim.balls() {
        renderer.draw_circle_outline(ball.pos, ball.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Polygon(Vec<Vec2>),
        Circle(Vec2, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn draw_polygon(&mut self, vertices: &[Vec2]) {
            self.calls.push(Call::Polygon(vertices.to_vec()));
        }

        fn draw_circle_outline(&mut self, center: Vec2, radius: f32) {
            self.calls.push(Call::Circle(center, radius));
        }
    }

    #[test]
    fn test_render_order() {
        let sim = Simulation::new(Config::new(), 5).unwrap();
        let mut recorder = Recorder::default();

        render(&mut recorder, &sim);

        assert_eq!(recorder.calls.len(), 1 + 1 + 4 + 16);
        assert_eq!(recorder.calls[0], Call::Clear);
        assert_eq!(
            recorder.calls[1],
            Call::Polygon(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(84.0, 0.0),
                Vec2::new(84.0, 56.0),
                Vec2::new(0.0, 56.0),
            ])
        );
        assert_eq!(recorder.calls[2], Call::Circle(Vec2::new(2.0, 2.0), 2.0));
        assert_eq!(recorder.calls[5], Call::Circle(Vec2::new(2.0, 54.0), 2.0));
        // cue ball is drawn first among the balls
        assert_eq!(recorder.calls[6], Call::Circle(Vec2::new(70.0, 28.0), 1.0));
    }

    #[test]
    fn test_render_does_not_step() {
        let sim = Simulation::new(Config::new(), 5).unwrap();
        let mut recorder = Recorder::default();

        render(&mut recorder, &sim);
        render(&mut recorder, &sim);

        assert_eq!(sim.time().now, 0.0);
        assert_eq!(recorder.calls.len(), 2 * 22);
    }

    #[test]
    fn test_render_through_trait_object() {
        let sim = Simulation::new(Config::new(), 5).unwrap();
        let mut recorder = Recorder::default();
        let dyn_renderer: &mut dyn Renderer = &mut recorder;

        render(dyn_renderer, &sim);

        assert_eq!(recorder.calls.len(), 22);
    }
}
