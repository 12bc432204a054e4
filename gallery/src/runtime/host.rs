use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::events::{HostEvent, HostEventSender, HostInput};
use super::rng::SeedSource;
use crate::context::Context;
use crate::core::error::Result;
use crate::render::canvas::Canvas;
use crate::render::export;
use crate::render::surface::Surface;
use crate::sketch::{Sketch, SketchConfig};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostState {
    Uninitialized,
    Running,
    Paused,
}

/// Drives one sketch instance through its lifecycle on one surface.
///
/// Every explicit reset produces exactly one synchronous `reset` + `draw`
/// pair, so the surface never shows a half-drawn frame from a previous seed.
pub struct Host<'a, S: Surface = Canvas> {
    config: &'static SketchConfig,
    sketch: &'a mut dyn Sketch,
    surface: S,
    ctx: Context,
    seeds: SeedSource,
    state: HostState,
    export_dir: PathBuf,
    events: Option<HostEventSender>,
    draw_count: u64,
    reset_count: u64,
}

impl<'a> Host<'a, Canvas> {
    /// Host backed by a [`Canvas`] sized from the descriptor.
    pub fn with_canvas(
        config: &'static SketchConfig,
        sketch: &'a mut dyn Sketch,
        seeds: SeedSource,
    ) -> Self {
        Self::new(config, sketch, Canvas::new(config.w, config.h), seeds)
    }
}

impl<'a, S: Surface> Host<'a, S> {
    pub fn new(
        config: &'static SketchConfig,
        sketch: &'a mut dyn Sketch,
        surface: S,
        seeds: SeedSource,
    ) -> Self {
        if surface.width() != config.w || surface.height() != config.h {
            warn!(
                "Surface {}x{} does not match {} descriptor {}x{}",
                surface.width(),
                surface.height(),
                config.name,
                config.w,
                config.h
            );
        }

        Self {
            config,
            sketch,
            ctx: Context::new([surface.width(), surface.height()], 0),
            surface,
            seeds,
            state: HostState::Uninitialized,
            export_dir: PathBuf::from("."),
            events: None,
            draw_count: 0,
            reset_count: 0,
        }
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn with_events(mut self, events: HostEventSender) -> Self {
        self.events = Some(events);
        self
    }

    pub fn config(&self) -> &'static SketchConfig {
        self.config
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Total `draw` invocations since construction.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    /// Total `reset` invocations since construction.
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    /// Reset, draw once, then run if the sketch loops or stay paused if it is
    /// a single-shot image. Only valid from `Uninitialized`.
    pub fn mount(&mut self) {
        if self.state != HostState::Uninitialized {
            warn!("{} is already mounted; ignoring mount", self.config.name);
            return;
        }

        info!(
            "Mounting {} ({}x{}, {})",
            self.config.display_name,
            self.config.w,
            self.config.h,
            if self.config.is_looping() {
                "looping"
            } else {
                "static"
            }
        );
        self.emit(HostEvent::Mounted(self.config.name.to_string()));

        self.reset_and_draw();

        let next = if self.config.is_looping() {
            HostState::Running
        } else {
            HostState::Paused
        };
        self.set_state(next);
    }

    /// One scheduled frame. Draws only while `Running`; returns whether a
    /// draw happened.
    pub fn tick(&mut self) -> bool {
        if self.state != HostState::Running {
            return false;
        }
        self.draw_frame();
        true
    }

    pub fn handle(&mut self, input: HostInput) -> Result<()> {
        if self.state == HostState::Uninitialized {
            warn!("Ignoring {:?} before mount", input);
            return Ok(());
        }

        match input {
            HostInput::Click | HostInput::Space => {
                self.reset_and_draw();
            }
            HostInput::Stop => {
                self.set_state(HostState::Paused);
            }
            HostInput::Resume => {
                if self.config.is_looping() {
                    self.set_state(HostState::Running);
                } else {
                    debug!(
                        "{} does not loop; resume ignored",
                        self.config.name
                    );
                }
            }
            HostInput::AdvanceFrame => {
                if self.state == HostState::Paused && self.config.is_looping()
                {
                    self.draw_frame();
                }
            }
            HostInput::Export => {
                self.export()?;
            }
        }

        Ok(())
    }

    /// Write the current surface to `<export_dir>/<sketch-name>.png`.
    ///
    /// A running sketch is paused for the capture and resumed afterwards. On
    /// failure the prior state is restored before the error is returned.
    pub fn export(&mut self) -> Result<PathBuf> {
        let prior = self.state;
        if prior == HostState::Running {
            self.set_state(HostState::Paused);
        }

        let path = export::export_path(&self.export_dir, self.config.name);
        let result = export::write_png(&path, &self.surface.capture());

        if self.state != prior {
            self.set_state(prior);
        }

        match result {
            Ok(()) => {
                self.emit(HostEvent::Exported(path.clone()));
                Ok(path)
            }
            Err(err) => {
                self.emit(HostEvent::ExportFailed(err.to_string()));
                Err(err)
            }
        }
    }

    fn reset_and_draw(&mut self) {
        let seed = self.seeds.next_seed();
        self.ctx.begin_session(seed);

        debug!("Resetting {} with seed {}", self.config.name, seed);
        self.surface.begin_frame();
        self.sketch.reset(&mut self.surface, &self.ctx);
        self.reset_count += 1;
        self.emit(HostEvent::Reset {
            sketch: self.config.name.to_string(),
            seed,
        });

        self.draw_frame();
    }

    fn draw_frame(&mut self) {
        self.surface.begin_frame();
        self.sketch.draw(&mut self.surface, &self.ctx);
        self.ctx.next_frame();
        self.draw_count += 1;
    }

    fn set_state(&mut self, state: HostState) {
        if self.state == state {
            return;
        }
        debug!("{}: {:?} -> {:?}", self.config.name, self.state, state);
        self.state = state;
        self.emit(HostEvent::StateChanged(state));
    }

    fn emit(&self, event: HostEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}
