use indexmap::IndexMap;

use crate::core::error::{GalleryError, Result};
use crate::sketch::{Sketch, SketchConfig};

/// A registered sketch. The instance is built once when the registry is
/// assembled and lives as long as the registry does.
pub struct SketchEntry {
    pub config: &'static SketchConfig,
    sketch: Box<dyn Sketch>,
}

impl SketchEntry {
    /// Split borrow used by the host at mount time.
    pub fn parts(&mut self) -> (&'static SketchConfig, &mut dyn Sketch) {
        (self.config, self.sketch.as_mut())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SketchCategory {
    pub title: String,
    pub enabled: bool,
    pub sketches: Vec<String>,
}

#[derive(Default)]
pub struct RuntimeRegistry {
    entries: IndexMap<String, SketchEntry>,
    categories: Vec<SketchCategory>,
}

impl RuntimeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        config: &'static SketchConfig,
        sketch: Box<dyn Sketch>,
    ) -> Result<()> {
        let name = config.name.to_string();
        if self.entries.contains_key(&name) {
            return Err(GalleryError::DuplicateSketch(name));
        }

        self.entries.insert(name, SketchEntry { config, sketch });

        Ok(())
    }

    pub fn define_category(
        &mut self,
        title: impl Into<String>,
        enabled: bool,
        sketches: Vec<String>,
    ) -> Result<()> {
        let title = title.into();

        for name in &sketches {
            if !self.entries.contains_key(name) {
                return Err(GalleryError::UnknownCategorySketch {
                    category: title,
                    sketch: name.clone(),
                });
            }
        }

        self.categories.push(SketchCategory {
            title,
            enabled,
            sketches,
        });

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&SketchEntry> {
        self.entries.get(name)
    }

    /// Mutable access for mounting; reports an unknown name as a navigation
    /// error.
    pub fn lookup(&mut self, name: &str) -> Result<&mut SketchEntry> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| GalleryError::SketchNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in registration order.
    pub fn sketch_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Descriptors with the most recently registered first.
    pub fn list(&self) -> Vec<&'static SketchConfig> {
        self.entries.values().rev().map(|entry| entry.config).collect()
    }

    pub fn first_sketch_name(&self) -> Option<&str> {
        self.entries.keys().next().map(String::as_str)
    }

    pub fn categories(&self) -> &[SketchCategory] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::render::surface::Surface;
    use crate::sketch::PlayMode;

    use super::*;

    struct TestSketch;

    impl Sketch for TestSketch {
        fn reset(&mut self, _surface: &mut dyn Surface, _ctx: &Context) {}
        fn draw(&mut self, _surface: &mut dyn Surface, _ctx: &Context) {}
    }

    static CONFIG: SketchConfig = SketchConfig {
        name: "test",
        display_name: "Test",
        play_mode: PlayMode::Once,
        fps: 60.0,
        w: 640,
        h: 480,
    };

    static OTHER: SketchConfig = SketchConfig {
        name: "other",
        display_name: "Other",
        play_mode: PlayMode::Loop,
        fps: 30.0,
        w: 100,
        h: 100,
    };

    #[test]
    fn registry_registers_and_lists_names() {
        let mut registry = RuntimeRegistry::new();
        registry
            .register(&CONFIG, Box::new(TestSketch))
            .expect("register test sketch");

        assert_eq!(registry.sketch_names(), vec!["test"]);
        assert_eq!(registry.first_sketch_name(), Some("test"));
        assert!(registry.get("test").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn list_is_most_recent_first() {
        let mut registry = RuntimeRegistry::new();
        registry.register(&CONFIG, Box::new(TestSketch)).unwrap();
        registry.register(&OTHER, Box::new(TestSketch)).unwrap();

        let names: Vec<_> = registry.list().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["other", "test"]);
        assert_eq!(registry.sketch_names(), vec!["test", "other"]);
    }

    #[test]
    fn registry_rejects_duplicates() {
        let mut registry = RuntimeRegistry::new();
        registry.register(&CONFIG, Box::new(TestSketch)).unwrap();

        let err = registry
            .register(&CONFIG, Box::new(TestSketch))
            .expect_err("duplicate must fail");
        assert!(matches!(
            err,
            GalleryError::DuplicateSketch(name) if name == "test"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_reports_navigation_error() {
        let mut registry = RuntimeRegistry::new();
        registry.register(&CONFIG, Box::new(TestSketch)).unwrap();

        assert!(registry.lookup("test").is_ok());
        let err = registry.lookup("does-not-exist").err().unwrap();
        assert!(err.is_navigation());
    }

    #[test]
    fn registry_rejects_category_with_unknown_sketch() {
        let mut registry = RuntimeRegistry::new();
        registry.register(&CONFIG, Box::new(TestSketch)).unwrap();

        let err = registry
            .define_category(
                "bad",
                true,
                vec!["test".to_string(), "missing".to_string()],
            )
            .expect_err("category should fail when sketch is unknown");

        assert!(err.to_string().contains("unknown sketch"));
    }

    #[test]
    fn registry_stores_categories() {
        let mut registry = RuntimeRegistry::new();
        registry.register(&CONFIG, Box::new(TestSketch)).unwrap();
        registry
            .define_category("main", true, vec!["test".to_string()])
            .expect("define category");

        assert_eq!(registry.categories().len(), 1);
        assert_eq!(registry.categories()[0].title, "main");
        assert!(registry.categories()[0].enabled);
        assert_eq!(registry.categories()[0].sketches, vec!["test"]);
    }
}
