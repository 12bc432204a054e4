use std::env;
use std::fs;
use std::path::PathBuf;

use gallery::prelude::*;
use gallery::runtime::settings::GallerySettings;

const SEED: u64 = 2024;
const LOOP_BOUND: u64 = 10_000;

fn scratch_dir(label: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!(
        "sketches-it-{}-{}",
        label,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn names(registry: &RuntimeRegistry) -> Vec<String> {
    registry
        .sketch_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn registry_builds_with_every_sketch_categorized() {
    let registry = sketches::registry().unwrap();
    let categorized: usize = registry
        .categories()
        .iter()
        .map(|category| category.sketches.len())
        .sum();

    assert_eq!(registry.len(), 11);
    assert_eq!(categorized, registry.len());
}

#[test]
fn lookup_by_name() {
    let mut registry = sketches::registry().unwrap();

    let entry = registry.get("Print10").unwrap();
    assert_eq!(entry.config.name, "Print10");
    assert_eq!(entry.config.play_mode, PlayMode::Once);

    assert!(registry.get("does-not-exist").is_none());
    let err = registry.lookup("does-not-exist").err().unwrap();
    assert!(err.is_navigation());
}

#[test]
fn listing_is_most_recent_first() {
    let registry = sketches::registry().unwrap();
    let listed: Vec<&str> = registry.list().iter().map(|c| c.name).collect();

    assert_eq!(listed.first(), Some(&"Dla"));
    assert_eq!(listed.last(), Some(&"Print10"));
    assert_eq!(registry.first_sketch_name(), Some("Print10"));
}

#[test]
fn every_sketch_survives_reset_and_one_draw() {
    let mut registry = sketches::registry().unwrap();

    for name in names(&registry) {
        let (config, sketch) = registry.lookup(&name).unwrap().parts();
        let mut host =
            Host::with_canvas(config, sketch, SeedSource::fixed(SEED));
        host.mount();

        assert_eq!(host.draw_count(), 1, "{}", name);
        assert!(
            host.surface().capture().has_pixel_other_than([0, 0, 0, 0]),
            "{} drew nothing",
            name
        );
    }
}

#[test]
fn looping_sketches_survive_many_draws() {
    let mut registry = sketches::registry().unwrap();

    for name in names(&registry) {
        let (config, sketch) = registry.lookup(&name).unwrap().parts();
        if !config.is_looping() {
            continue;
        }

        let mut host =
            Host::with_canvas(config, sketch, SeedSource::fixed(SEED));
        host.mount();
        for _ in 0..LOOP_BOUND {
            assert!(host.tick());
        }

        assert_eq!(host.draw_count(), LOOP_BOUND + 1, "{}", name);
        assert_eq!(host.state(), HostState::Running);
    }
}

#[test]
fn fixed_seed_reproduces_every_sketch() {
    let mut registry = sketches::registry().unwrap();

    for name in names(&registry) {
        let (config, sketch) = registry.lookup(&name).unwrap().parts();
        let mut host =
            Host::with_canvas(config, sketch, SeedSource::fixed(SEED));
        host.mount();
        for _ in 0..30 {
            host.tick();
        }
        let first = host.surface().capture();

        host.handle(HostInput::Space).unwrap();
        for _ in 0..30 {
            host.tick();
        }
        let second = host.surface().capture();

        assert!(first.data == second.data, "{} is not deterministic", name);
    }
}

#[test]
fn pause_is_idempotent_and_resume_is_loop_only() {
    let mut registry = sketches::registry().unwrap();

    let (config, sketch) = registry.lookup("Walkers").unwrap().parts();
    let mut host = Host::with_canvas(config, sketch, SeedSource::fixed(SEED));
    host.mount();
    host.handle(HostInput::Stop).unwrap();
    host.handle(HostInput::Stop).unwrap();
    assert_eq!(host.state(), HostState::Paused);
    assert!(!host.tick());
    host.handle(HostInput::Resume).unwrap();
    assert_eq!(host.state(), HostState::Running);

    let (config, sketch) = registry.lookup("Mondrian").unwrap().parts();
    let mut host = Host::with_canvas(config, sketch, SeedSource::fixed(SEED));
    host.mount();
    host.handle(HostInput::Resume).unwrap();
    assert_eq!(host.state(), HostState::Paused);
    assert_eq!(host.draw_count(), 1);
}

#[test]
fn print10_renders_and_exports_end_to_end() {
    let dir = scratch_dir("print10");
    let mut registry = sketches::registry().unwrap();

    let (config, sketch) = registry.lookup("Print10").unwrap().parts();
    let mut host = Host::with_canvas(config, sketch, SeedSource::fixed(SEED))
        .with_export_dir(&dir);
    host.mount();

    assert_eq!(host.state(), HostState::Paused);
    assert_eq!(host.context().resolution_u32(), [600, 600]);
    let corner = host.surface().capture().pixel(0, 0).unwrap();
    let image = host.surface().capture();
    assert!(image.has_pixel_other_than(corner));

    let path = host.export().unwrap();
    assert_eq!(path, dir.join("Print10.png"));
    assert!(path.is_file());
    assert_eq!(host.state(), HostState::Paused);
    assert_eq!(host.draw_count(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn headless_render_of_a_looping_sketch() {
    let dir = scratch_dir("headless");
    let mut registry = sketches::registry().unwrap();
    let settings = GallerySettings {
        images_dir: dir.to_string_lossy().into_owned(),
        seed: Some(SEED),
        ..GallerySettings::default()
    };

    let path =
        gallery::render_headless(&mut registry, "Dragon", 120, &settings)
            .unwrap();
    assert_eq!(path.file_name().unwrap(), "Dragon.png");
    assert!(path.is_file());

    let err = gallery::render_headless(&mut registry, "Nope", 1, &settings)
        .err()
        .unwrap();
    assert!(err.is_navigation());

    let _ = fs::remove_dir_all(&dir);
}
