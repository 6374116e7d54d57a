//! Application state and the terminal event loop.
//!
//! API calls run on spawned tasks and report back over an unbounded channel
//! as [`UiEvent`]s, so the loop never blocks on the network while drawing or
//! reading keys.

use std::sync::Arc;
use std::time::Duration;

use brainlogger_core::entry::{is_open_task, EntryType};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::api::{ClientError, LogApi};
use crate::capture::{CaptureForm, CaptureView, FormAction};
use crate::task_list::TaskList;
use crate::types::{CreateLogRequest, LogEntry};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

const HELP: &str = "Ctrl+Enter save | Tab/F1-F4 type | Esc quit";

/// A finished capture, plus the refreshed task list when one was fetched.
#[derive(Debug)]
pub struct CaptureOutcome {
    pub entry: LogEntry,
    pub tasks: Option<Vec<LogEntry>>,
}

/// Results delivered from background API calls.
///
/// `generation` orders the task lists: a list fetched for an older request
/// never replaces one from a newer request.
#[derive(Debug)]
pub enum UiEvent {
    TasksLoaded {
        generation: u64,
        tasks: Vec<LogEntry>,
    },
    CaptureFinished {
        generation: u64,
        result: Result<CaptureOutcome, ClientError>,
    },
}

/// Fetch open tasks, logging and swallowing any failure.
pub async fn refresh_tasks(api: &dyn LogApi) -> Option<Vec<LogEntry>> {
    match api.get_open_tasks().await {
        Ok(tasks) => {
            tracing::debug!(count = tasks.len(), "Loaded open tasks");
            Some(tasks)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load open tasks");
            None
        }
    }
}

/// Append an entry. Only a Task capture can change the open task list, so
/// only then are the tasks fetched again.
pub async fn capture(
    api: &dyn LogApi,
    request: CreateLogRequest,
) -> Result<CaptureOutcome, ClientError> {
    let entry = api.create_log(&request).await?;
    tracing::info!(id = entry.id, entry_type = %entry.entry_type, "Captured entry");

    let tasks = if entry.entry_type == EntryType::Task {
        refresh_tasks(api).await
    } else {
        None
    };
    Ok(CaptureOutcome { entry, tasks })
}

pub struct App {
    pub form: CaptureForm,
    pub tasks: Vec<LogEntry>,
    pub should_quit: bool,
    api: Arc<dyn LogApi>,
    events: UnboundedSender<UiEvent>,
    issued_generation: u64,
    shown_generation: u64,
}

impl App {
    pub fn new(api: Arc<dyn LogApi>, events: UnboundedSender<UiEvent>) -> Self {
        Self {
            form: CaptureForm::new(),
            tasks: Vec::new(),
            should_quit: false,
            api,
            events,
            issued_generation: 0,
            shown_generation: 0,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.issued_generation += 1;
        self.issued_generation
    }

    pub fn spawn_refresh(&mut self) {
        let generation = self.next_generation();
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            if let Some(tasks) = refresh_tasks(&*api).await {
                let _ = events.send(UiEvent::TasksLoaded { generation, tasks });
            }
        });
    }

    fn spawn_capture(&mut self, request: CreateLogRequest) {
        let generation = self.next_generation();
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = capture(&*api, request).await;
            let _ = events.send(UiEvent::CaptureFinished { generation, result });
        });
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::TasksLoaded { generation, tasks } => self.show_tasks(generation, tasks),
            UiEvent::CaptureFinished {
                generation,
                result: Ok(outcome),
            } => {
                self.form.finish_submit(true);
                if let Some(tasks) = outcome.tasks {
                    self.show_tasks(generation, tasks);
                }
            }
            UiEvent::CaptureFinished { result: Err(e), .. } => {
                tracing::error!(error = %e, "Failed to save entry");
                self.form.finish_submit(false);
            }
        }
    }

    fn show_tasks(&mut self, generation: u64, mut tasks: Vec<LogEntry>) {
        if generation <= self.shown_generation {
            tracing::debug!(generation, shown = self.shown_generation, "Dropping stale task list");
            return;
        }
        tasks.retain(|t| is_open_task(t.entry_type, t.completed_at.is_some()));
        self.tasks = tasks;
        self.shown_generation = generation;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c'));
        if key.code == KeyCode::Esc || ctrl_c {
            self.should_quit = true;
            return;
        }

        if let FormAction::Submit(request) = self.form.handle_key(key) {
            self.spawn_capture(request);
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [capture_area, _, tasks_area, help_area] = Layout::vertical([
            Constraint::Length(11),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(CaptureView { form: &self.form }, capture_area);
        frame.render_widget(TaskList { tasks: &self.tasks }, tasks_area);
        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}

/// Drive the UI until the user quits. Loads the open tasks once at start.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut events: UnboundedReceiver<UiEvent>,
) -> anyhow::Result<()> {
    let mut keys = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    app.spawn_refresh();

    while !app.should_quit {
        terminal.draw(|frame| app.draw(frame))?;

        tokio::select! {
            maybe_event = keys.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = events.recv() => app.apply(event),
            _ = tick.tick() => {}
        }
    }

    Ok(())
}
