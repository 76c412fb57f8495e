//! Presentation session
//!
//! A [`Session`] exclusively owns all mutable presentation state: the
//! timeline, camera, banners, starfield and the active fireworks. Events
//! mutate that state immediately, and the effects become visible on the next
//! [`tick`](Session::tick). Nothing is shared, so nothing is locked.

use crate::camera::PerspectiveCamera;
use crate::config::SceneConfig;
use crate::input::{Hint, InputRouter, SceneCommand};
use crate::render::{Fog, FrameSnapshot, RenderSurface};
use crate::timeline::{SceneTimeline, TimelineState};
use crate::Result;
use image::RgbaImage;
use nova_core::{Color, Vec2};
use nova_particles::{
    sprite_texture, BannerId, Firework, ParticleSampler, Starfield, TextBanner,
    TextParticleSystem,
};
use nova_platform::{ControlFlow, Event, PlatformError, SurfaceSize, Window};
use nova_text::{BannerCanvas, FontRegistry};
use rand::Rng;
use serde::Serialize;

/// Side length of the firework sprite texture
const SPRITE_SIZE: u32 = 32;

/// Summary of one tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameStats {
    pub frame: u64,
    pub elapsed: f32,
    pub scroll_progress: f32,
    pub interaction_enabled: bool,
    pub camera_z: f32,
    pub old_opacity: f32,
    pub new_opacity: f32,
    pub fireworks_active: usize,
    /// Fireworks removed during this tick
    pub fireworks_retired: usize,
    pub firework_particles: usize,
}

/// The running presentation
pub struct Session<R: Rng> {
    config: SceneConfig,
    rng: R,
    surface: SurfaceSize,
    camera: PerspectiveCamera,
    timeline: SceneTimeline,
    router: InputRouter,
    banners: TextParticleSystem,
    old_banner: BannerId,
    new_banner: BannerId,
    starfield: Starfield,
    fireworks: Vec<Firework>,
    sprite: RgbaImage,
    fog: Fog,
    hint: Hint,
    hint_changed: bool,
    frame: u64,
}

impl<R: Rng> Session<R> {
    /// Build the presentation for `window`, discovering system fonts
    pub fn attach(config: SceneConfig, window: &impl Window, rng: R) -> Result<Self> {
        Self::attach_with_fonts(config, window, FontRegistry::new(), rng)
    }

    /// Build the presentation using an explicit font registry
    ///
    /// Fails only when the window has no usable render surface or the config
    /// holds an unparsable color. A missing font leaves the banner without
    /// particles.
    pub fn attach_with_fonts(
        config: SceneConfig,
        window: &impl Window,
        fonts: FontRegistry,
        mut rng: R,
    ) -> Result<Self> {
        let surface = window.surface().ok_or(PlatformError::SurfaceUnavailable)?;
        if surface.width == 0 || surface.height == 0 {
            return Err(PlatformError::InvalidSurface {
                width: surface.width,
                height: surface.height,
            }
            .into());
        }
        config.validate()?;

        let mut canvas = BannerCanvas::with_registry(config.canvas.width, config.canvas.height, fonts)
            .with_family(config.canvas.font_family.clone());

        let mut banners = TextParticleSystem::new();
        let old_banner = banners.add(build_banner(
            &mut canvas,
            &config.sampler,
            &config.banners.old.label,
            config.banners.old.sub_label.as_deref(),
            config.banners.old.depth,
            config.banners.old.tint()?,
            &mut rng,
        ));
        let new_banner = banners.add(build_banner(
            &mut canvas,
            &config.sampler,
            &config.banners.new.label,
            config.banners.new.sub_label.as_deref(),
            config.banners.new.depth,
            config.banners.new.tint()?,
            &mut rng,
        ));

        let starfield = Starfield::new(&config.stars, &mut rng);
        let camera = PerspectiveCamera::from_config(&config.camera, surface.aspect());
        let timeline = SceneTimeline::new(config.timeline.clone(), &config.camera);
        let fog = Fog {
            color: config.fog.color()?,
            density: config.fog.density,
        };

        let mut router = InputRouter::new(surface);
        let hint = router
            .update_hint(timeline.interaction_enabled())
            .unwrap_or_else(Hint::scroll);

        tracing::info!(
            "Session attached: {}x{} surface, {} banner particles, {} stars",
            surface.width,
            surface.height,
            banners.particle_count(),
            starfield.len()
        );

        let mut session = Self {
            config,
            rng,
            surface,
            camera,
            timeline,
            router,
            banners,
            old_banner,
            new_banner,
            starfield,
            fireworks: Vec::new(),
            sprite: sprite_texture(SPRITE_SIZE),
            fog,
            hint,
            hint_changed: true,
            frame: 0,
        };
        session.apply_timeline_to_banners();
        Ok(session)
    }

    /// Apply one platform event
    pub fn handle_event(&mut self, event: Event) -> ControlFlow {
        let Some(command) = self.router.route(&event, self.timeline.state()) else {
            return ControlFlow::Continue;
        };

        match command {
            SceneCommand::SetScrollProgress(progress) => self.set_scroll_progress(progress),
            SceneCommand::Launch(ndc) => {
                self.launch_at(ndc);
            }
            SceneCommand::Resize(size) => {
                self.camera.set_aspect(size.aspect());
                self.surface = size;
                tracing::debug!(
                    "Resized to {}x{} (pixel ratio {})",
                    size.width,
                    size.height,
                    size.clamped_pixel_ratio()
                );
            }
            SceneCommand::Close => return ControlFlow::Exit,
        }
        ControlFlow::Continue
    }

    /// Set scroll progress directly (clamped to `[0, 1]`)
    pub fn set_scroll_progress(&mut self, progress: f32) {
        if self.timeline.set_scroll_progress(progress) {
            if let Some(hint) = self.router.update_hint(self.timeline.interaction_enabled()) {
                tracing::info!("Hint: {}", hint.text);
                self.hint = hint;
                self.hint_changed = true;
            }
        }
    }

    /// Launch a firework through `ndc` onto the incoming banner's plane
    ///
    /// Returns whether a firework was spawned.
    pub fn launch_at(&mut self, ndc: Vec2) -> bool {
        let ray = self.camera.ray_from_ndc(ndc);
        let Some(target) = ray.intersect_z_plane(self.config.banners.new.depth) else {
            tracing::debug!("Pointer ray parallel to banner plane, no launch");
            return false;
        };
        let firework = Firework::new(target, self.config.fireworks.clone(), &mut self.rng);
        self.fireworks.push(firework);
        true
    }

    /// Advance the presentation by one frame of `dt` seconds
    pub fn tick(&mut self, dt: f32) -> FrameStats {
        let timeline = self.timeline.tick(dt);
        self.camera.set_z(timeline.camera_z);
        self.apply_timeline_to_banners();
        self.banners.update(timeline.elapsed);
        self.starfield.update();

        let mut retired = 0;
        for i in (0..self.fireworks.len()).rev() {
            self.fireworks[i].update(&mut self.rng);
            if self.fireworks[i].is_done() {
                self.fireworks.remove(i);
                retired += 1;
            }
        }

        self.frame += 1;
        let stats = FrameStats {
            frame: self.frame,
            elapsed: timeline.elapsed,
            scroll_progress: self.timeline.scroll_progress(),
            interaction_enabled: self.timeline.interaction_enabled(),
            camera_z: timeline.camera_z,
            old_opacity: timeline.old_opacity,
            new_opacity: timeline.new_opacity,
            fireworks_active: self.fireworks.len(),
            fireworks_retired: retired,
            firework_particles: self.fireworks.iter().map(|f| f.positions().len()).sum(),
        };
        tracing::trace!("{:?}", stats);
        stats
    }

    /// Hand the current frame to the render boundary
    pub fn render(&mut self, target: &mut impl RenderSurface) -> Result<()> {
        let snapshot = FrameSnapshot {
            frame: self.frame,
            elapsed: self.timeline.state().elapsed,
            surface: self.surface,
            camera: &self.camera,
            fog: self.fog,
            banners: &self.banners,
            starfield: &self.starfield,
            fireworks: &self.fireworks,
            sprite: &self.sprite,
            hint: &self.hint,
        };
        target.present(&snapshot)
    }

    fn apply_timeline_to_banners(&mut self) {
        let old_opacity = self.timeline.old_opacity();
        let old_scale = self.timeline.old_scale();
        let new_opacity = self.timeline.new_opacity();
        if let Some(banner) = self.banners.get_mut(self.old_banner) {
            banner.set_opacity(old_opacity);
            banner.set_scale(old_scale);
        }
        if let Some(banner) = self.banners.get_mut(self.new_banner) {
            banner.set_opacity(new_opacity);
        }
    }

    pub fn timeline_state(&self) -> &TimelineState {
        self.timeline.state()
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn banners(&self) -> &TextParticleSystem {
        &self.banners
    }

    pub fn old_banner(&self) -> Option<&TextBanner> {
        self.banners.get(self.old_banner)
    }

    pub fn new_banner(&self) -> Option<&TextBanner> {
        self.banners.get(self.new_banner)
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    /// The hint, if it changed since the last call
    pub fn take_hint_update(&mut self) -> Option<&Hint> {
        if std::mem::take(&mut self.hint_changed) {
            Some(&self.hint)
        } else {
            None
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

fn build_banner(
    canvas: &mut BannerCanvas,
    sampler: &ParticleSampler,
    label: &str,
    sub_label: Option<&str>,
    depth: f32,
    tint: Color,
    rng: &mut impl Rng,
) -> TextBanner {
    let image = canvas.render(label, sub_label);
    let cloud = sampler.sample(&image, rng);
    if cloud.is_empty() {
        tracing::warn!("Banner {:?} produced no particles", label);
    }
    TextBanner::new(label, sub_label.map(str::to_string), depth, tint, cloud)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneError;
    use nova_platform::{HeadlessWindow, InputEvent};
    use nova_text::GenericFont;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.stars.count = 64;
        config.canvas.width = 64;
        config.canvas.height = 32;
        config
    }

    fn session() -> Session<StdRng> {
        Session::attach_with_fonts(
            test_config(),
            &HeadlessWindow::new(800, 600),
            FontRegistry::empty(),
            StdRng::seed_from_u64(42),
        )
        .unwrap()
    }

    fn scroll_to(session: &mut Session<StdRng>, progress: f32) {
        // 1000px of scroll range
        session.handle_event(Event::Input(InputEvent::scroll(progress * 1000.0, 1600.0, 600.0)));
    }

    #[test]
    fn test_missing_surface_is_fatal() {
        let result = Session::attach_with_fonts(
            test_config(),
            &HeadlessWindow::without_surface(),
            FontRegistry::empty(),
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(
            result,
            Err(SceneError::Platform(PlatformError::SurfaceUnavailable))
        ));
    }

    #[test]
    fn test_zero_sized_surface_is_rejected() {
        let result = Session::attach_with_fonts(
            test_config(),
            &HeadlessWindow::new(0, 600),
            FontRegistry::empty(),
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(
            result,
            Err(SceneError::Platform(PlatformError::InvalidSurface { width: 0, height: 600 }))
        ));
    }

    #[test]
    fn test_missing_fonts_degrade_to_empty_banners() {
        let session = session();
        assert_eq!(session.banners().len(), 2);
        assert_eq!(session.banners().particle_count(), 0);
        assert_eq!(session.starfield().len(), 64);
        assert!(session.fireworks().is_empty());
    }

    #[test]
    fn test_system_fonts_give_particle_banners() {
        let has_font = FontRegistry::new()
            .load_with_fallback(Some("Arial"), GenericFont::SansSerif, 700)
            .is_ok();
        if !has_font {
            return;
        }

        let mut config = SceneConfig::default();
        config.stars.count = 64;
        let session = Session::attach(
            config,
            &HeadlessWindow::new(800, 600),
            StdRng::seed_from_u64(3),
        )
        .unwrap();

        assert!(session.banners().particle_count() > 0);
        let old = session.old_banner().unwrap();
        let new = session.new_banner().unwrap();
        assert!(!old.cloud().is_empty());
        assert!(!new.cloud().is_empty());
        // Both size classes appear once a sub-label is painted
        assert!(new.cloud().size_classes().iter().any(|&s| s == 1.0));
        assert!(new.cloud().size_classes().iter().any(|&s| s == 0.45));

        let image = BannerCanvas::new(BannerCanvas::DEFAULT_WIDTH, BannerCanvas::DEFAULT_HEIGHT)
            .render("2025", Some("Goodbye"));
        assert_eq!(ParticleSampler::default().count(&image), old.cloud().len());
    }

    #[test]
    fn test_click_after_threshold_spawns_one_firework() {
        let mut session = session();
        scroll_to(&mut session, 0.95);
        assert!(session.timeline_state().interaction_enabled);

        let flow = session.handle_event(Event::Input(InputEvent::click(400.0, 300.0)));
        assert_eq!(flow, ControlFlow::Continue);
        assert_eq!(session.fireworks().len(), 1);
        let target = session.fireworks()[0].target();
        assert!((target.z - 1180.0).abs() < 1e-3);
        assert!(target.x.abs() < 1e-3 && target.y.abs() < 1e-3);
    }

    #[test]
    fn test_click_before_threshold_spawns_nothing() {
        let mut session = session();
        scroll_to(&mut session, 0.5);
        session.handle_event(Event::Input(InputEvent::click(400.0, 300.0)));
        assert!(session.fireworks().is_empty());
    }

    #[test]
    fn test_scroll_mapping_endpoints_reach_banners() {
        let mut session = session();
        session.tick(1.0 / 60.0);
        assert_eq!(session.old_banner().map(|b| b.opacity()), Some(1.0));
        assert_eq!(session.new_banner().map(|b| b.opacity()), Some(0.0));

        scroll_to(&mut session, 1.0);
        session.tick(1.0 / 60.0);
        assert_eq!(session.old_banner().map(|b| b.opacity()), Some(0.0));
        assert_eq!(session.old_banner().map(|b| b.scale()), Some(0.5));
        assert_eq!(session.new_banner().map(|b| b.opacity()), Some(1.0));
    }

    #[test]
    fn test_interaction_enabled_at_exact_threshold() {
        let mut session = session();
        session.set_scroll_progress(0.9);
        assert!(session.timeline_state().interaction_enabled);
        session.set_scroll_progress(0.89);
        assert!(!session.timeline_state().interaction_enabled);
    }

    #[test]
    fn test_hint_updates_on_threshold_crossing() {
        let mut session = session();
        assert_eq!(session.take_hint_update().map(|h| h.text), Some(Hint::SCROLL_TEXT));
        assert!(session.take_hint_update().is_none());

        scroll_to(&mut session, 0.3);
        assert!(session.take_hint_update().is_none());
        scroll_to(&mut session, 0.95);
        assert_eq!(session.take_hint_update().map(|h| h.text), Some(Hint::CLICK_TEXT));
        scroll_to(&mut session, 1.0);
        assert!(session.take_hint_update().is_none());
    }

    #[test]
    fn test_fireworks_retire_after_fading() {
        let mut session = session();
        session.set_scroll_progress(1.0);
        assert!(session.launch_at(Vec2::ZERO));
        assert!(session.launch_at(Vec2::new(0.5, -0.5)));

        let mut retired = 0;
        for _ in 0..120 {
            retired += session.tick(1.0 / 60.0).fireworks_retired;
        }
        assert_eq!(retired, 2);
        assert!(session.fireworks().is_empty());
    }

    #[test]
    fn test_tick_eases_camera_and_rotates_stars() {
        let mut session = session();
        session.set_scroll_progress(1.0);
        let stats = session.tick(1.0 / 60.0);
        assert!((stats.camera_z - 156.0).abs() < 1e-3);
        assert_eq!(session.camera().z(), stats.camera_z);
        assert!((session.starfield().rotation() - 0.001).abs() < 1e-7);
        assert_eq!(stats.frame, 1);
    }

    #[test]
    fn test_resize_updates_camera_aspect() {
        let mut session = session();
        session.handle_event(Event::resized(1200, 400));
        assert!((session.camera().aspect - 3.0).abs() < 1e-6);
        assert_eq!(session.surface().width, 1200);
    }

    #[test]
    fn test_close_requested_exits() {
        let mut session = session();
        let flow = session.handle_event(Event::Window(nova_platform::WindowEvent::CloseRequested));
        assert_eq!(flow, ControlFlow::Exit);
    }

    struct CountingSurface {
        frames: Vec<(u64, usize)>,
    }

    impl RenderSurface for CountingSurface {
        fn present(&mut self, frame: &FrameSnapshot<'_>) -> Result<()> {
            self.frames.push((frame.frame, frame.point_count()));
            Ok(())
        }
    }

    #[test]
    fn test_render_hands_snapshot_to_surface() {
        let mut session = session();
        let mut surface = CountingSurface { frames: Vec::new() };
        session.tick(0.016);
        session.render(&mut surface).unwrap();
        assert_eq!(surface.frames, vec![(1, 64)]);
    }

    #[test]
    fn test_same_seed_same_fireworks() {
        let mut a = session();
        let mut b = session();
        for s in [&mut a, &mut b] {
            s.set_scroll_progress(1.0);
            s.launch_at(Vec2::ZERO);
            for _ in 0..30 {
                s.tick(0.016);
            }
        }
        assert_eq!(a.fireworks()[0].positions(), b.fireworks()[0].positions());
    }
}
