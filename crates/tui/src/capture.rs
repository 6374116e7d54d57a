//! Capture form: free-text content plus an entry type, submitted as a new
//! log entry.
//!
//! [`CaptureForm`] holds the editable state and interprets key presses.
//! [`CaptureView`] renders it. Network I/O lives in [`crate::app`]; the form
//! only hands out the request to send and is told how it went.

use brainlogger_core::entry::{validate_content, EntryType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::type_picker::{next_type, prev_type, TypePicker, DEFAULT_TYPE};
use crate::types::{CreateLogRequest, SINGLE_USER_ID};

pub const PLACEHOLDER: &str = "What's on your mind? (Ctrl+Enter to save)";
pub const SUBMIT_LABEL: &str = "[ Capture ]";
pub const SUBMITTING_LABEL: &str = "[ Saving... ]";

/// What the caller should do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    None,
    Submit(CreateLogRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureForm {
    pub content: String,
    pub entry_type: EntryType,
    pub submitting: bool,
}

impl Default for CaptureForm {
    fn default() -> Self {
        Self {
            content: String::new(),
            entry_type: DEFAULT_TYPE,
            submitting: false,
        }
    }
}

impl CaptureForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission needs non-blank content and no request already in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && validate_content(&self.content).is_ok()
    }

    /// Enter the submitting state and return the request to send, or `None`
    /// if the form cannot be submitted right now.
    pub fn begin_submit(&mut self) -> Option<CreateLogRequest> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        Some(CreateLogRequest {
            entry_type: self.entry_type,
            content: self.content.clone(),
            user_id: SINGLE_USER_ID,
        })
    }

    /// Leave the submitting state. A successful capture clears the form;
    /// a failed one keeps what the user typed so they can retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.content.clear();
            self.entry_type = DEFAULT_TYPE;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Enter if is_submit_modifier(key.modifiers) => {
                return match self.begin_submit() {
                    Some(request) => FormAction::Submit(request),
                    None => FormAction::None,
                };
            }
            KeyCode::Enter => self.content.push('\n'),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.content.push(c);
            }
            KeyCode::Backspace => {
                self.content.pop();
            }
            KeyCode::Tab => self.entry_type = next_type(self.entry_type),
            KeyCode::BackTab => self.entry_type = prev_type(self.entry_type),
            KeyCode::F(n @ 1..=4) => self.entry_type = EntryType::ALL[usize::from(n - 1)],
            _ => {}
        }
        FormAction::None
    }
}

fn is_submit_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// Input box, type picker and capture button stacked vertically.
pub struct CaptureView<'a> {
    pub form: &'a CaptureForm,
}

impl Widget for CaptureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [input_area, picker_area, button_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let input = if self.form.content.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.form.content.as_str())
        };
        input
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Capture ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .render(input_area, buf);

        TypePicker {
            selected: self.form.entry_type,
        }
        .render(picker_area, buf);

        let (label, style) = if self.form.submitting {
            (SUBMITTING_LABEL, Style::default().fg(Color::DarkGray))
        } else if self.form.can_submit() {
            (
                SUBMIT_LABEL,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (SUBMIT_LABEL, Style::default().fg(Color::DarkGray))
        };
        Paragraph::new(label)
            .alignment(Alignment::Right)
            .style(style)
            .render(button_area, buf);
    }
}
