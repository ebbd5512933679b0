//! Terminal CLI Prompter
//!
//! Runs an [`Interpreter`] on a real terminal: line editing, history recall,
//! Tab completion and a quick-command menu. It plays the rendering layer, so
//! it only reads interpreter state and carries out host requests.

use std::io::{self, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use inquire::{InquireError, Select};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::{
    bridge::{PanelEvent, RequestDispatcher},
    interpreter::Interpreter,
    output::Payload,
    render::render_payload,
    suggest::SuggestionCycle,
    utils::{highlight_text, HighlightColor},
};

/// Interactive terminal front end
pub struct CliPrompter {
    interpreter: Interpreter,
    dispatcher: RequestDispatcher,
    panel_events: UnboundedReceiver<PanelEvent>,
    /// Delayed panel switches still in flight
    pending: Vec<JoinHandle<()>>,
    cycle: SuggestionCycle,
    /// Line as typed before the first Tab; completions are computed from it
    tab_seed: Option<String>,
    should_exit: bool,
}

impl CliPrompter {
    pub fn new(interpreter: Interpreter) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            interpreter,
            dispatcher: RequestDispatcher::new(tx),
            panel_events: rx,
            pending: Vec::new(),
            cycle: SuggestionCycle::new(),
            tab_seed: None,
            should_exit: false,
        }
    }

    /// Run the main CLI loop
    pub async fn run(&mut self) -> io::Result<()> {
        self.show_welcome()?;

        enable_raw_mode()?;
        let result = self.run_input_loop().await;
        let _ = disable_raw_mode();

        // the host owns cancellation of delayed panel switches
        for handle in self.pending.drain(..) {
            handle.abort();
        }

        result
    }

    fn show_welcome(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout)?;
        writeln!(stdout, "{}", highlight_text("Welcome to my portfolio terminal.", HighlightColor::Bold))?;
        writeln!(stdout, "Type 'help' to see what you can do, Tab to complete,")?;
        writeln!(stdout, "↑/↓ for history and '/' on an empty line for quick commands.")?;
        writeln!(stdout)?;
        stdout.flush()
    }

    async fn run_input_loop(&mut self) -> io::Result<()> {
        while !self.should_exit {
            let mut input_buffer = String::new();
            let mut cursor_pos = 0usize;
            self.redraw_input_line(&input_buffer, cursor_pos)?;

            loop {
                self.drain_panel_events()?;

                if event::poll(std::time::Duration::from_millis(100))? {
                    if let Event::Key(key_event) = event::read()? {
                        if self.handle_key_event(key_event, &mut input_buffer, &mut cursor_pos)? {
                            break;
                        }
                    }
                }
                // let timer tasks make progress on this worker
                tokio::task::yield_now().await;
            }
        }
        Ok(())
    }

    /// Handle one key press; returns true once the line is finished
    fn handle_key_event(
        &mut self,
        key_event: KeyEvent,
        input_buffer: &mut String,
        cursor_pos: &mut usize,
    ) -> io::Result<bool> {
        if key_event.code != KeyCode::Tab {
            self.cycle.reset();
            self.tab_seed = None;
        }

        match key_event {
            KeyEvent {
                code: KeyCode::Char('c') | KeyCode::Char('d'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => {
                self.should_exit = true;
                print!("\r\n");
                return Ok(true);
            }

            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => {
                print!("\r\n");
                let line = std::mem::take(input_buffer);
                self.process_line(&line)?;
                *cursor_pos = 0;
                return Ok(true);
            }

            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => {
                if *cursor_pos > 0 {
                    let at = byte_offset(input_buffer, *cursor_pos - 1);
                    input_buffer.remove(at);
                    *cursor_pos -= 1;
                    self.redraw_input_line(input_buffer, *cursor_pos)?;
                }
            }

            KeyEvent {
                code: KeyCode::Left,
                ..
            } => {
                if *cursor_pos > 0 {
                    *cursor_pos -= 1;
                    self.redraw_input_line(input_buffer, *cursor_pos)?;
                }
            }

            KeyEvent {
                code: KeyCode::Right,
                ..
            } => {
                if *cursor_pos < input_buffer.chars().count() {
                    *cursor_pos += 1;
                    self.redraw_input_line(input_buffer, *cursor_pos)?;
                }
            }

            KeyEvent {
                code: KeyCode::Up, ..
            } => {
                if let Some(previous) = self.interpreter.recall_previous() {
                    *input_buffer = previous.to_string();
                    *cursor_pos = input_buffer.chars().count();
                    self.redraw_input_line(input_buffer, *cursor_pos)?;
                }
            }

            KeyEvent {
                code: KeyCode::Down,
                ..
            } => {
                *input_buffer = self
                    .interpreter
                    .recall_next()
                    .map(str::to_string)
                    .unwrap_or_default();
                *cursor_pos = input_buffer.chars().count();
                self.redraw_input_line(input_buffer, *cursor_pos)?;
            }

            KeyEvent {
                code: KeyCode::Tab, ..
            } => {
                let seed = self
                    .tab_seed
                    .get_or_insert_with(|| input_buffer.clone())
                    .clone();
                let candidates = self.interpreter.suggest(&seed);
                if let Some(accepted) = self.cycle.accept(candidates) {
                    *input_buffer = accepted.to_string();
                    *cursor_pos = input_buffer.chars().count();
                    self.redraw_input_line(input_buffer, *cursor_pos)?;
                }
            }

            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => {
                if input_buffer.is_empty() && c == '/' {
                    print!("\r\n");
                    let _ = disable_raw_mode();
                    let selected = self.show_quick_commands();
                    let _ = enable_raw_mode();

                    if let Some(command) = selected? {
                        self.redraw_input_line(&command, command.chars().count())?;
                        print!("\r\n");
                        self.process_line(&command)?;
                    }
                    return Ok(true);
                }

                let at = byte_offset(input_buffer, *cursor_pos);
                input_buffer.insert(at, c);
                *cursor_pos += 1;
                self.redraw_input_line(input_buffer, *cursor_pos)?;
            }

            _ => {}
        }

        Ok(false)
    }

    /// Redraw the prompt and input with the cursor at `cursor_pos` (in chars)
    fn redraw_input_line(&self, input_buffer: &str, cursor_pos: usize) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(
            stdout,
            "\r\x1B[K{} {} {}",
            highlight_text(&self.interpreter.prompt(), HighlightColor::Cyan),
            self.interpreter.config().prompt_symbol,
            input_buffer
        )?;

        let chars_after_cursor = input_buffer.chars().count() - cursor_pos;
        if chars_after_cursor > 0 {
            write!(stdout, "\x1B[{}D", chars_after_cursor)?;
        }
        stdout.flush()
    }

    fn process_line(&mut self, input: &str) -> io::Result<()> {
        let outcome = self.interpreter.submit(input);
        debug!(records = outcome.records.len(), requests = outcome.requests.len(), "line processed");

        let width = terminal::size().map(|(cols, _)| cols as usize).unwrap_or(80);
        let symbol = self.interpreter.config().prompt_symbol.clone();
        let mut stdout = io::stdout();
        for record in &outcome.records {
            // the typed line is already on screen
            if matches!(record.payload, Payload::Echo { .. }) {
                continue;
            }
            for line in render_payload(&record.payload, width, &symbol) {
                write!(stdout, "{}\r\n", line)?;
            }
        }
        stdout.flush()?;

        self.pending.retain(|handle| !handle.is_finished());
        for request in outcome.requests {
            if let Some(handle) = self.dispatcher.dispatch(request) {
                self.pending.push(handle);
            }
        }
        self.drain_panel_events()
    }

    /// React to side effects that have come due
    fn drain_panel_events(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        while let Ok(event) = self.panel_events.try_recv() {
            info!(?event, "panel event");
            match event {
                PanelEvent::Cleared => {
                    write!(stdout, "\x1B[2J\x1B[1;1H")?;
                }
                PanelEvent::Switched(section) => {
                    let note = format!("[panel: {}]", section);
                    write!(stdout, "\r\x1B[K{}\r\n", highlight_text(&note, HighlightColor::Dim))?;
                }
                PanelEvent::OpenExternal(uri) => {
                    let note = format!("[opened in a new tab: {}]", uri);
                    write!(stdout, "\r\x1B[K{}\r\n", highlight_text(&note, HighlightColor::Blue))?;
                }
            }
        }
        stdout.flush()
    }

    /// Curated commands for the current section; `None` when cancelled
    fn show_quick_commands(&self) -> io::Result<Option<String>> {
        let commands = self.interpreter.quick_commands();
        let selection = Select::new("Quick commands:", commands)
            .with_page_size(10)
            .with_help_message("Use arrow keys to navigate, Enter to run, Esc to cancel")
            .prompt();

        match selection {
            Ok(command) => Ok(Some(command)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(e) => {
                let message = format!("Quick command menu error: {}", e);
                println!("{}", highlight_text(&message, HighlightColor::Red));
                Ok(None)
            }
        }
    }
}

/// Byte index of the `char_pos`-th character
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
