use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

use super::host::HostState;

/// User input routed to the active host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostInput {
    /// Primary pointer click; re-seeds the sketch.
    Click,
    /// Space key; same as a click.
    Space,
    Stop,
    Resume,
    Export,
    /// Draw exactly one frame while paused.
    AdvanceFrame,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RuntimeCommand {
    Input(HostInput),
    /// Leave the active view and return to the selector.
    Leave,
    /// Navigate to a sketch by name (`open <name>`).
    Open(String),
    /// A bare unrecognized word. The selector opens it as a sketch name; an
    /// open view ignores it.
    Word(String),
    List,
    Quit,
}

impl RuntimeCommand {
    /// Parse one line of terminal input. Blank lines are ignored and a single
    /// space is the space key.
    pub fn parse(line: &str) -> Option<Self> {
        if line == " " {
            return Some(Self::Input(HostInput::Space));
        }

        let command = match line.trim() {
            "" => return None,
            "click" | "c" => Self::Input(HostInput::Click),
            "space" | "r" | "reset" => Self::Input(HostInput::Space),
            "p" | "stop" => Self::Input(HostInput::Stop),
            "l" | "resume" => Self::Input(HostInput::Resume),
            "s" | "save" | "export" => Self::Input(HostInput::Export),
            "a" | "advance" => Self::Input(HostInput::AdvanceFrame),
            "q" | "back" => Self::Leave,
            "ls" | "list" => Self::List,
            "quit" | "exit" => Self::Quit,
            line => match line.split_once(char::is_whitespace) {
                Some(("open" | "o", name)) if !name.trim().is_empty() => {
                    Self::Open(name.trim().to_string())
                }
                _ => Self::Word(line.to_string()),
            },
        };

        Some(command)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Mounted(String),
    Reset { sketch: String, seed: u64 },
    StateChanged(HostState),
    Exported(PathBuf),
    ExportFailed(String),
    /// The view stopped because a sketch faulted.
    Halted(String),
}

pub type RuntimeCommandSender = Sender<RuntimeCommand>;
pub type RuntimeCommandReceiver = Receiver<RuntimeCommand>;
pub type HostEventSender = Sender<HostEvent>;
pub type HostEventReceiver = Receiver<HostEvent>;

pub fn command_channel() -> (RuntimeCommandSender, RuntimeCommandReceiver) {
    mpsc::channel()
}

pub fn event_channel() -> (HostEventSender, HostEventReceiver) {
    mpsc::channel()
}
