//! Frame-callback driven render loop.

use rand::Rng;
use yuletide_canvas::Surface;

use crate::scene::Scene;

/// Host capability to run another tick before the next repaint.
pub trait FrameScheduler {
    /// Request one more frame tick.
    fn request_frame(&mut self);
}

/// Lifecycle of the render loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopState {
    /// Created, no frame drawn yet.
    #[default]
    Idle,
    /// Drawing a frame per tick and rescheduling itself.
    Running,
}

/// Drives a [`Scene`] one frame per tick.
#[derive(Debug)]
pub struct RenderLoop<R> {
    scene: Scene<R>,
    state: LoopState,
    /// Frames drawn since start.
    frames: u64,
}

impl<R: Rng> RenderLoop<R> {
    pub fn new(scene: Scene<R>) -> Self {
        Self {
            scene,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &Scene<R> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<R> {
        &mut self.scene
    }

    /// Leave the idle state and draw the first frame right away.
    pub fn start<S, F>(&mut self, surface: &mut S, scheduler: &mut F)
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.state == LoopState::Running {
            log::warn!("render loop already running");
            return;
        }
        self.state = LoopState::Running;
        log::info!("render loop started");
        self.tick(surface, scheduler);
    }

    /// Draw one frame in fixed order, then schedule the next tick.
    ///
    /// Order: clear, background, stars, tree, ornaments, snow.
    pub fn tick<S, F>(&mut self, surface: &mut S, scheduler: &mut F)
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.state == LoopState::Idle {
            log::warn!("tick ignored, render loop not started");
            return;
        }
        self.scene.draw_frame(surface);
        self.frames += 1;
        scheduler.request_frame();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use yuletide_canvas::{DrawOp, Fill, RecordingSurface};
    use yuletide_core::{SceneSettings, Viewport, palette};

    use super::*;
    use crate::fields::stars::MAX_TWINKLE_SPEED;

    /// Counts requests; tests drain them to drive ticks by hand.
    #[derive(Debug, Default)]
    struct ManualScheduler {
        pending: u32,
        requested: u32,
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) {
            self.pending += 1;
            self.requested += 1;
        }
    }

    impl ManualScheduler {
        fn take(&mut self) -> bool {
            if self.pending == 0 {
                return false;
            }
            self.pending -= 1;
            true
        }
    }

    fn scenario() -> (RenderLoop<StdRng>, RecordingSurface) {
        let viewport = Viewport::new(800, 600);
        let settings = SceneSettings {
            star_count: 200,
            snow_count: 300,
            ornament_count: 30,
            ..Default::default()
        };
        let scene = Scene::new(viewport, settings, StdRng::seed_from_u64(2024));
        (RenderLoop::new(scene), RecordingSurface::new(800, 600))
    }

    fn is_circle(op: &DrawOp) -> bool {
        matches!(op, DrawOp::FillCircle { .. })
    }

    #[test]
    fn test_idle_until_started() {
        let (mut render_loop, mut surface) = scenario();
        let mut scheduler = ManualScheduler::default();
        assert_eq!(render_loop.state(), LoopState::Idle);

        render_loop.tick(&mut surface, &mut scheduler);
        assert!(surface.ops().is_empty());
        assert_eq!(scheduler.requested, 0);

        render_loop.start(&mut surface, &mut scheduler);
        assert_eq!(render_loop.state(), LoopState::Running);
        assert_eq!(render_loop.frames(), 1);
        assert_eq!(scheduler.requested, 1);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let (mut render_loop, mut surface) = scenario();
        let mut scheduler = ManualScheduler::default();
        render_loop.start(&mut surface, &mut scheduler);
        render_loop.start(&mut surface, &mut scheduler);
        assert_eq!(render_loop.frames(), 1);
        assert_eq!(scheduler.requested, 1);
    }

    #[test]
    fn test_single_frame_draw_order() {
        let (mut render_loop, mut surface) = scenario();
        let mut scheduler = ManualScheduler::default();
        let stars_before = render_loop.scene().stars().stars().to_vec();
        let flakes_before = render_loop.scene().snow().flakes().to_vec();
        let visible = {
            let scene = render_loop.scene();
            scene.ornaments().visible(scene.tree()).count()
        };

        render_loop.start(&mut surface, &mut scheduler);
        assert_eq!(scheduler.requested, 1);

        let ops = surface.ops();
        assert_eq!(
            ops[0],
            DrawOp::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0
            }
        );
        assert!(matches!(&ops[1], DrawOp::SetFill(Fill::LinearGradient(_))));
        assert_eq!(
            ops[2],
            DrawOp::FillRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0
            }
        );

        // Stars, then tree paths, then ornaments and snow as circles.
        let circles: Vec<usize> = (0..ops.len()).filter(|&i| is_circle(&ops[i])).collect();
        assert_eq!(circles.len(), 200 + visible + 300);
        let first_path = ops.iter().position(|op| *op == DrawOp::BeginPath).unwrap();
        let last_fill = ops.iter().rposition(|op| *op == DrawOp::FillPath).unwrap();
        assert_eq!(surface.count(|op| *op == DrawOp::FillPath), 4);
        assert!(circles[199] < first_path);
        assert!(circles[200] > last_fill);

        // Ornament circles use palette colours, snow is white.
        for &i in &circles[200..200 + visible] {
            match &ops[i - 1] {
                DrawOp::SetFill(Fill::Solid(color)) => assert!(palette::ORNAMENTS.contains(color)),
                other => panic!("unexpected op before ornament: {:?}", other),
            }
        }
        let snow_start = circles[200 + visible];
        assert_eq!(ops[snow_start - 1], DrawOp::SetFill(Fill::Solid(palette::WHITE)));

        // One frame twinkles every star by one step and moves every flake by dy.
        for (before, after) in stars_before.iter().zip(render_loop.scene().stars().stars()) {
            assert_eq!(after.alpha, before.alpha + before.twinkle_speed);
            assert!(after.opacity() <= 1.0 + MAX_TWINKLE_SPEED);
        }
        for (before, after) in flakes_before.iter().zip(render_loop.scene().snow().flakes()) {
            if before.y + before.dy <= 600.0 {
                assert_eq!(after.y, before.y + before.dy);
            } else {
                assert_eq!(after.y, -after.radius);
            }
        }
    }

    #[test]
    fn test_drive_fixed_number_of_ticks() {
        let (mut render_loop, mut surface) = scenario();
        let mut scheduler = ManualScheduler::default();
        render_loop.start(&mut surface, &mut scheduler);
        for _ in 0..9 {
            assert!(scheduler.take());
            render_loop.tick(&mut surface, &mut scheduler);
        }
        assert_eq!(render_loop.frames(), 10);
        assert_eq!(scheduler.requested, 10);
        assert_eq!(scheduler.pending, 1);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::ClearRect { .. })), 10);
    }

    #[test]
    fn test_snow_recycles_over_many_ticks() {
        let (mut render_loop, mut surface) = scenario();
        let mut scheduler = ManualScheduler::default();
        render_loop.start(&mut surface, &mut scheduler);
        // Enough frames for every flake to cross the whole viewport.
        for _ in 0..500 {
            render_loop.tick(&mut surface, &mut scheduler);
            surface.take_ops();
        }
        for flake in render_loop.scene().snow().flakes() {
            assert!(flake.y <= 600.0);
            assert!(flake.y >= -flake.radius);
        }
    }
}
