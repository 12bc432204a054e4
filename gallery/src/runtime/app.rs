use std::any::Any;
use std::io::{self, BufRead};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Instant;

use log::{debug, error, info, warn};

use super::events::{
    HostEvent, HostEventReceiver, RuntimeCommand, RuntimeCommandReceiver,
    RuntimeCommandSender, command_channel, event_channel,
};
use super::frame_clock::FrameClock;
use super::host::{Host, HostState};
use super::registry::RuntimeRegistry;
use super::rng::SeedSource;
use super::settings::GallerySettings;
use crate::core::error::{GalleryError, Result};

const FPS_REPORT_INTERVAL: u64 = 300;

/// How a view ended.
#[derive(Debug, Eq, PartialEq)]
enum ViewExit {
    Leave,
    Open(String),
    Quit,
}

/// Run the interactive selector over `registry`, reading commands from
/// stdin. Opens `initial_sketch` first when given.
pub fn run_registry(
    mut registry: RuntimeRegistry,
    initial_sketch: Option<&str>,
    settings: &GallerySettings,
) -> Result<()> {
    let (command_tx, command_rx) = command_channel();
    spawn_stdin_reader(command_tx);

    run_selector(&mut registry, initial_sketch, settings, &command_rx)
}

/// Mount `name`, advance it `frames` ticks without pacing, and export the
/// result. Static sketches ignore `frames` beyond their single draw.
pub fn render_headless(
    registry: &mut RuntimeRegistry,
    name: &str,
    frames: u64,
    settings: &GallerySettings,
) -> Result<PathBuf> {
    let entry = registry.lookup(name)?;
    let (config, sketch) = entry.parts();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut host = Host::with_canvas(
            config,
            sketch,
            SeedSource::from_option(settings.seed),
        )
        .with_export_dir(&settings.images_dir);

        host.mount();
        for _ in 0..frames {
            host.tick();
        }
        info!(
            "Rendered {} with {} draw(s)",
            config.display_name,
            host.draw_count()
        );
        host.export()
    }));

    result.unwrap_or_else(|payload| Err(sketch_defect(config.name, payload)))
}

/// Print the registry grouped by enabled category, most recent first.
pub fn print_listing(registry: &RuntimeRegistry) {
    println!("Sketches (most recent first):");
    for config in registry.list() {
        let in_enabled_category = registry.categories().is_empty()
            || registry.categories().iter().any(|category| {
                category.enabled
                    && category.sketches.iter().any(|n| n == config.name)
            });
        if !in_enabled_category {
            continue;
        }

        println!(
            "  {:<16} {:>4}x{:<4} {}",
            config.name,
            config.w,
            config.h,
            if config.is_looping() {
                "loop"
            } else {
                "static"
            }
        );
    }
    println!(
        "Type a name to open it. In a view: space/click reset, p stop, \
        l resume, s save, a advance, open <name> switch, q back, quit exit."
    );
}

fn run_selector(
    registry: &mut RuntimeRegistry,
    initial_sketch: Option<&str>,
    settings: &GallerySettings,
    commands: &RuntimeCommandReceiver,
) -> Result<()> {
    let mut next = initial_sketch.map(str::to_string);

    if next.is_none() {
        print_listing(registry);
    }

    loop {
        let name = match next.take() {
            Some(name) => name,
            None => match commands.recv() {
                Ok(RuntimeCommand::Open(name))
                | Ok(RuntimeCommand::Word(name)) => name,
                Ok(RuntimeCommand::List) | Ok(RuntimeCommand::Leave) => {
                    print_listing(registry);
                    continue;
                }
                Ok(RuntimeCommand::Quit) | Err(_) => return Ok(()),
                Ok(RuntimeCommand::Input(input)) => {
                    debug!("No active view for {:?}", input);
                    continue;
                }
            },
        };

        match open_view(registry, &name, settings, commands) {
            Ok(ViewExit::Leave) => print_listing(registry),
            Ok(ViewExit::Open(other)) => next = Some(other),
            Ok(ViewExit::Quit) => return Ok(()),
            Err(err) if err.is_navigation() => {
                error!("{}", err);
                println!(
                    "Unknown sketch `{}`. Type `list` to see names.",
                    name
                );
            }
            Err(err) => {
                error!("{}", err);
                println!("{} Back at the selector.", err);
            }
        }
    }
}

/// Look up `name` and run its view. A panic inside the sketch halts only
/// this view and comes back as [`GalleryError::SketchDefect`].
fn open_view(
    registry: &mut RuntimeRegistry,
    name: &str,
    settings: &GallerySettings,
    commands: &RuntimeCommandReceiver,
) -> Result<ViewExit> {
    let entry = registry.lookup(name)?;
    let (config, sketch) = entry.parts();
    let (event_tx, event_rx) = event_channel();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let host = Host::with_canvas(
            config,
            sketch,
            SeedSource::from_option(settings.seed),
        )
        .with_export_dir(&settings.images_dir)
        .with_events(event_tx);

        let fps = settings.effective_fps(config.fps);
        run_view(host, fps, commands, &event_rx)
    }));

    match result {
        Ok(exit) => Ok(exit),
        Err(payload) => {
            let err = sketch_defect(config.name, payload);
            report(&HostEvent::Halted(err.to_string()));
            Err(err)
        }
    }
}

fn run_view(
    mut host: Host<'_>,
    fps: f32,
    commands: &RuntimeCommandReceiver,
    events: &HostEventReceiver,
) -> ViewExit {
    let mut clock = FrameClock::new(fps);

    host.mount();
    events.try_iter().for_each(|event| report(&event));

    loop {
        let command = if host.state() == HostState::Running {
            let timeout = clock
                .next_deadline()
                .saturating_duration_since(Instant::now());
            match commands.recv_timeout(timeout) {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => return ViewExit::Quit,
            }
        } else {
            match commands.recv() {
                Ok(command) => Some(command),
                Err(_) => return ViewExit::Quit,
            }
        };

        if let Some(command) = command {
            let was_running = host.state() == HostState::Running;

            match command {
                RuntimeCommand::Input(input) => {
                    if let Err(err) = host.handle(input) {
                        error!("{}", err);
                    }
                }
                RuntimeCommand::Leave => return ViewExit::Leave,
                RuntimeCommand::Quit => return ViewExit::Quit,
                RuntimeCommand::Open(name) => return ViewExit::Open(name),
                RuntimeCommand::Word(word) => {
                    warn!("Unknown command `{}`", word);
                    println!(
                        "Unknown command `{}`. Use `open <name>` to switch \
                        sketches.",
                        word
                    );
                }
                RuntimeCommand::List => {
                    println!(
                        "{} is open; press q to return to the list.",
                        host.config().display_name
                    );
                }
            }

            if !was_running && host.state() == HostState::Running {
                clock.restart(Instant::now());
            }
        }

        if host.state() == HostState::Running && clock.tick(Instant::now()) {
            host.tick();

            if clock.frame_count() % FPS_REPORT_INTERVAL == 0 {
                debug!(
                    "{}: frame {} at {:.1} fps",
                    host.config().name,
                    host.context().frame_count(),
                    clock.average_fps()
                );
            }
        }

        events.try_iter().for_each(|event| report(&event));
    }
}

fn report(event: &HostEvent) {
    match event {
        HostEvent::Mounted(name) => println!("Opened {}", name),
        HostEvent::Reset { seed, .. } => println!("Seed {}", seed),
        HostEvent::StateChanged(state) => println!("{:?}", state),
        HostEvent::Exported(path) => println!("Saved {}", path.display()),
        HostEvent::ExportFailed(message) => {
            println!("Save failed: {}", message)
        }
        HostEvent::Halted(message) => println!("Halted: {}", message),
    }
}

fn sketch_defect(sketch: &str, payload: Box<dyn Any + Send>) -> GalleryError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    GalleryError::SketchDefect {
        sketch: sketch.to_string(),
        message,
    }
}

/// Forward terminal lines as commands. End of input quits.
fn spawn_stdin_reader(tx: RuntimeCommandSender) {
    let spawned = thread::Builder::new()
        .name("stdin-commands".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("Failed to read stdin: {}", err);
                        break;
                    }
                };

                let line = line.trim_end_matches('\r');
                if let Some(command) = RuntimeCommand::parse(line) {
                    if tx.send(command).is_err() {
                        return;
                    }
                }
            }
            let _ = tx.send(RuntimeCommand::Quit);
        });

    if let Err(err) = spawned {
        error!("Failed to spawn stdin reader: {}", err);
    }
}

/// Run the selector over a fixed command sequence instead of stdin. The
/// selector returns once the sequence is exhausted.
pub fn run_selector_scripted(
    registry: &mut RuntimeRegistry,
    settings: &GallerySettings,
    script: Vec<RuntimeCommand>,
) -> Result<()> {
    let (tx, rx) = command_channel();
    for command in script {
        let _ = tx.send(command);
    }
    drop(tx);
    run_selector(registry, None, settings, &rx)
}
