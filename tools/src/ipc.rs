//! JSON-lines bridge between a front-end and the game store.
//!
//! One request per line in, one response per line out. Malformed lines
//! and storage failures are answered with `{"error": ...}` and the loop
//! keeps going; only I/O failure on the pipes ends it.

use anyhow::Result;
use stashdash_core::{
    command::PlayerCommand,
    event::GameEvent,
    feedback::{FeedbackCue, FeedbackDirector},
    slot::SaveSlot,
    view::{notice_for, StatusView},
    GameError, GameStateStore,
};
use std::io::{BufRead, Write};

/// `{"type":"command","cmd":...}` carries the command fields inline.
#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IpcRequest {
    GetState,
    Command(PlayerCommand),
    Quit,
}

#[derive(Debug, serde::Serialize)]
pub struct IpcResponse {
    view:        StatusView,
    events:      Vec<GameEvent>,
    cues:        Vec<FeedbackCue>,
    notice:      Option<String>,
    /// The daily limit refused an expense; show the blocking modal.
    limit_modal: bool,
    /// Drop overlays and redraw from scratch.
    reload:      bool,
}

pub fn run_ipc_loop<S, R, W>(
    store: &mut GameStateStore<S>,
    feedback: &mut FeedbackDirector,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    S: SaveSlot,
    R: BufRead,
    W: Write,
{
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                write_error(&mut output, &e.to_string())?;
                continue;
            }
        };

        let response = match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => idle_response(store),
            IpcRequest::Command(command) => match handle_command(store, feedback, command) {
                Ok(response) => response,
                Err(e) => {
                    log::error!("command failed: {e}");
                    write_error(&mut output, &e.to_string())?;
                    continue;
                }
            },
        };
        writeln!(output, "{}", serde_json::to_string(&response)?)?;
        output.flush()?;
    }
    Ok(())
}

fn write_error<W: Write>(output: &mut W, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(output, "{}", err_json)?;
    output.flush()?;
    Ok(())
}

/// Run one command. Refused actions become a response with a notice;
/// storage failures come back as `Err`.
fn handle_command<S: SaveSlot>(
    store: &mut GameStateStore<S>,
    feedback: &mut FeedbackDirector,
    command: PlayerCommand,
) -> Result<IpcResponse, GameError> {
    let name = command.name();
    match store.execute(command) {
        Ok(outcome) => {
            let reload = outcome.events.contains(&GameEvent::ViewReset);
            Ok(IpcResponse {
                view: StatusView::build(&outcome.state, store.config()),
                cues: feedback.cues_for(&outcome.events),
                events: outcome.events,
                notice: None,
                limit_modal: false,
                reload,
            })
        }
        Err(e) if e.is_user_facing() => {
            log::info!("{name} refused: {e}");
            let mut response = idle_response(store);
            response.notice = notice_for(&e, store.config());
            response.cues = feedback.cue_for_error(&e).into_iter().collect();
            response.events = e.signal().into_iter().collect();
            response.limit_modal = matches!(e, GameError::LimitExceeded { .. });
            Ok(response)
        }
        Err(e) => Err(e),
    }
}

fn idle_response<S: SaveSlot>(store: &GameStateStore<S>) -> IpcResponse {
    IpcResponse {
        view:        StatusView::build(store.state(), store.config()),
        events:      Vec::new(),
        cues:        Vec::new(),
        notice:      None,
        limit_modal: false,
        reload:      false,
    }
}
