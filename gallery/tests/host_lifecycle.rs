mod support;

use std::fs;

use gallery::prelude::*;
use gallery::runtime::events::RuntimeCommand;
use gallery::runtime::settings::GallerySettings;
use serial_test::serial;

/// Scatters seeded dots; static.
struct Dots {
    rng: SketchRng,
}

impl Sketch for Dots {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        surface.background(WHITE);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        surface.no_stroke();
        for _ in 0..200 {
            let p = Vec2::new(
                self.rng.random_range(0.0..ctx.width()),
                self.rng.random_range(0.0..ctx.height()),
            );
            surface.fill(Color::hsl(self.rng.random(), 0.7, 0.5));
            surface.ellipse(p, 6.0, 6.0);
        }
    }
}

static DOTS: SketchConfig = SketchConfig {
    name: "Dots",
    display_name: "Dots",
    play_mode: PlayMode::Once,
    fps: 60.0,
    w: 600,
    h: 600,
};

/// Walks one pixel per frame; loops.
struct Crawl {
    rng: SketchRng,
    pos: Vec2,
}

impl Sketch for Crawl {
    fn reset(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        self.rng = ctx.rng();
        self.pos = ctx.center();
        surface.background(BLACK);
    }

    fn draw(&mut self, surface: &mut dyn Surface, ctx: &Context) {
        let step = Vec2::new(
            self.rng.random_range(-1.0..=1.0),
            self.rng.random_range(-1.0..=1.0),
        );
        self.pos = (self.pos + step).clamp(Vec2::ZERO, ctx.resolution());
        surface.stroke(WHITE);
        surface.point(self.pos);
    }
}

static CRAWL: SketchConfig = SketchConfig {
    name: "Crawl",
    display_name: "Crawl",
    play_mode: PlayMode::Loop,
    fps: 60.0,
    w: 64,
    h: 64,
};

struct Faulty;

impl Sketch for Faulty {
    fn reset(&mut self, _surface: &mut dyn Surface, _ctx: &Context) {}

    fn draw(&mut self, _surface: &mut dyn Surface, _ctx: &Context) {
        let cells: Vec<u8> = Vec::new();
        let _ = cells[3];
    }
}

static FAULTY: SketchConfig = SketchConfig {
    name: "Faulty",
    display_name: "Faulty",
    play_mode: PlayMode::Once,
    fps: 60.0,
    w: 16,
    h: 16,
};

fn dots() -> Dots {
    Dots {
        rng: gallery::runtime::rng::from_seed(0),
    }
}

fn crawl() -> Crawl {
    Crawl {
        rng: gallery::runtime::rng::from_seed(0),
        pos: Vec2::ZERO,
    }
}

#[test]
#[serial]
fn static_sketch_end_to_end() {
    let dir = support::scratch_dir("e2e");
    let mut sketch = dots();
    let mut host = Host::with_canvas(&DOTS, &mut sketch, SeedSource::fixed(3))
        .with_export_dir(&dir);

    host.mount();
    assert_eq!(host.state(), HostState::Paused);
    assert_eq!((host.reset_count(), host.draw_count()), (1, 1));
    assert_eq!(host.surface().width(), 600);
    let image = host.surface().capture();
    assert!(image.has_pixel_other_than([255, 255, 255, 255]));

    let path = host.export().expect("export");
    assert_eq!(path, dir.join("Dots.png"));
    assert!(fs::metadata(&path).expect("exported file").len() > 0);
    assert_eq!(host.state(), HostState::Paused);

    host.handle(HostInput::Export).expect("export via key");
    assert_eq!(host.state(), HostState::Paused);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn export_while_running_resumes() {
    let dir = support::scratch_dir("running");
    let mut sketch = crawl();
    let mut host =
        Host::with_canvas(&CRAWL, &mut sketch, SeedSource::fixed(3))
            .with_export_dir(&dir);

    host.mount();
    host.tick();
    host.handle(HostInput::Export).expect("export");

    assert_eq!(host.state(), HostState::Running);
    assert!(dir.join("Crawl.png").exists());
    assert!(host.tick());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reset_is_deterministic_under_fixed_seed() {
    let mut sketch = dots();
    let mut host =
        Host::with_canvas(&DOTS, &mut sketch, SeedSource::fixed(1234));

    host.mount();
    let first = host.surface().capture();

    host.handle(HostInput::Click).unwrap();
    let second = host.surface().capture();

    assert_eq!(first, second);
}

#[test]
fn looping_reset_discards_previous_walk() {
    let mut sketch = crawl();
    let mut host =
        Host::with_canvas(&CRAWL, &mut sketch, SeedSource::fixed(77));

    host.mount();
    for _ in 0..50 {
        host.tick();
    }
    let long_walk = host.surface().capture();

    host.handle(HostInput::Space).unwrap();
    let fresh = host.surface().capture();
    assert_ne!(long_walk, fresh);

    for _ in 0..50 {
        host.tick();
    }
    assert_eq!(host.surface().capture(), long_walk);
}

#[test]
fn different_seeds_differ() {
    let mut sketch = dots();
    let mut host =
        Host::with_canvas(&DOTS, &mut sketch, SeedSource::fixed(1));
    host.mount();
    let a = host.surface().capture();
    drop(host);

    let mut host =
        Host::with_canvas(&DOTS, &mut sketch, SeedSource::fixed(2));
    host.mount();
    assert_ne!(a, host.surface().capture());
}

fn test_registry() -> RuntimeRegistry {
    let mut registry = RuntimeRegistry::new();
    registry.register(&DOTS, Box::new(dots())).unwrap();
    registry.register(&CRAWL, Box::new(crawl())).unwrap();
    registry.register(&FAULTY, Box::new(Faulty)).unwrap();
    registry
}

#[test]
#[serial]
fn selector_survives_unknown_names_and_faulty_sketches() {
    let dir = support::scratch_dir("selector");
    let settings = GallerySettings {
        images_dir: dir.to_string_lossy().into_owned(),
        seed: Some(5),
        ..GallerySettings::default()
    };
    let mut registry = test_registry();

    let script = vec![
        RuntimeCommand::Open("does-not-exist".to_string()),
        RuntimeCommand::Open("Faulty".to_string()),
        RuntimeCommand::Open("Dots".to_string()),
        RuntimeCommand::Input(HostInput::Export),
        RuntimeCommand::Leave,
        RuntimeCommand::Quit,
    ];

    gallery::runtime::app::run_selector_scripted(
        &mut registry,
        &settings,
        script,
    )
    .expect("selector keeps running");

    assert!(dir.join("Dots.png").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn headless_render_exports_named_png() {
    let dir = support::scratch_dir("headless");
    let settings = GallerySettings {
        images_dir: dir.to_string_lossy().into_owned(),
        seed: Some(8),
        ..GallerySettings::default()
    };
    let mut registry = test_registry();

    let path =
        gallery::render_headless(&mut registry, "Crawl", 20, &settings)
            .expect("render");
    assert_eq!(path, dir.join("Crawl.png"));
    assert!(path.exists());

    let err = gallery::render_headless(&mut registry, "nope", 1, &settings)
        .expect_err("unknown sketch");
    assert!(err.is_navigation());

    let err = gallery::render_headless(&mut registry, "Faulty", 1, &settings)
        .expect_err("faulty sketch");
    assert!(matches!(err, GalleryError::SketchDefect { .. }));

    let _ = fs::remove_dir_all(&dir);
}
