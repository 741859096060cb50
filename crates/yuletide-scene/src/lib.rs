//! Animated holiday scene for the yuletide terminal toy.
//!
//! A [`Scene`] owns every entity collection (stars, snowflakes, ornaments)
//! together with the tree geometry and the viewport. A [`RenderLoop`] drives
//! it one frame at a time against any [`yuletide_canvas::Surface`], asking an
//! injected [`FrameScheduler`] for the next tick.

mod fields;
mod render_loop;
mod scene;

pub use fields::ornaments::{Ornament, OrnamentField};
pub use fields::snow::{SnowField, Snowflake};
pub use fields::stars::{Star, StarField};
pub use fields::tree::{Segment, Tree, Trunk, draw_star, star_polygon};
pub use render_loop::{FrameScheduler, LoopState, RenderLoop};
pub use scene::Scene;
