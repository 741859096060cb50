//! Scene context owning the viewport and every entity collection.

use rand::Rng;
use yuletide_canvas::{LinearGradient, Surface};
use yuletide_core::{SceneSettings, Viewport, palette};

use crate::fields::ornaments::OrnamentField;
use crate::fields::snow::SnowField;
use crate::fields::stars::StarField;
use crate::fields::tree::Tree;

/// The whole holiday scene.
///
/// All mutable state lives here and is only touched from [`Scene::draw_frame`]
/// and [`Scene::handle_resize`], so a single owner drives everything.
#[derive(Debug)]
pub struct Scene<R> {
    viewport: Viewport,
    settings: SceneSettings,
    stars: StarField,
    snow: SnowField,
    tree: Tree,
    ornaments: OrnamentField,
    /// Random source for placement and snow recycling.
    rng: R,
}

impl<R: Rng> Scene<R> {
    /// Build every collection for the given viewport.
    pub fn new(viewport: Viewport, settings: SceneSettings, mut rng: R) -> Self {
        let stars = StarField::new(settings.star_count, &viewport, &mut rng);
        let snow = SnowField::new(settings.snow_count, &viewport, &mut rng);
        let tree = Tree::for_viewport(&viewport);
        let ornaments = OrnamentField::new(
            settings.ornament_count,
            &tree,
            &settings.ornament_colors,
            &mut rng,
        );

        log::debug!(
            "scene built for {}x{}: {} stars, {} flakes, {} ornaments",
            viewport.width,
            viewport.height,
            settings.star_count,
            settings.snow_count,
            settings.ornament_count,
        );

        Self {
            viewport,
            settings,
            stars,
            snow,
            tree,
            ornaments,
            rng,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn snow(&self) -> &SnowField {
        &self.snow
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn ornaments(&self) -> &OrnamentField {
        &self.ornaments
    }

    /// Apply a new host size: store it and resize the surface to match.
    ///
    /// Tree and ornaments keep their startup geometry unless
    /// `relayout_on_resize` is set.
    pub fn handle_resize<S: Surface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
        let changed = viewport != self.viewport;
        self.viewport = viewport;
        surface.resize(viewport.width, viewport.height);

        if changed && self.settings.relayout_on_resize {
            self.tree = Tree::for_viewport(&viewport);
            self.ornaments = OrnamentField::new(
                self.settings.ornament_count,
                &self.tree,
                &self.settings.ornament_colors,
                &mut self.rng,
            );
            log::debug!("tree relaid out for {}x{}", viewport.width, viewport.height);
        }
        if changed {
            log::info!("viewport resized to {}x{}", viewport.width, viewport.height);
        }
    }

    /// Draw one complete frame, advancing stars and snow.
    pub fn draw_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (width, height) = (self.viewport.width_f32(), self.viewport.height_f32());

        surface.clear_rect(0.0, 0.0, width, height);
        surface.set_fill(
            LinearGradient::vertical(height, palette::SKY_TOP, palette::SKY_BOTTOM).into(),
        );
        surface.fill_rect(0.0, 0.0, width, height);

        self.stars.update_and_draw(surface);
        self.tree.draw(surface);
        self.ornaments.draw(surface, &self.tree);
        let recycled = self.snow.update_and_draw(surface, &self.viewport, &mut self.rng);
        if recycled > 0 {
            log::trace!("{} snowflakes recycled", recycled);
        }
    }
}
