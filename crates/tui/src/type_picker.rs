//! The four-way entry type selector shown under the capture input.

use brainlogger_core::entry::EntryType;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Type preselected when the form opens and after each successful capture.
pub const DEFAULT_TYPE: EntryType = EntryType::Note;

/// The type after `current`, wrapping from the last back to the first.
pub fn next_type(current: EntryType) -> EntryType {
    let all = EntryType::ALL;
    all[(current.index() + 1) % all.len()]
}

/// The type before `current`, wrapping from the first to the last.
pub fn prev_type(current: EntryType) -> EntryType {
    let all = EntryType::ALL;
    all[(current.index() + all.len() - 1) % all.len()]
}

pub fn type_color(entry_type: EntryType) -> Color {
    match entry_type {
        EntryType::Task => Color::Blue,
        EntryType::Idea => Color::Yellow,
        EntryType::Note => Color::Green,
        EntryType::Wait => Color::Magenta,
    }
}

/// Renders one bordered cell per type with the selected one filled in.
pub struct TypePicker {
    pub selected: EntryType,
}

impl Widget for TypePicker {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for (entry_type, cell) in EntryType::ALL.into_iter().zip(cells.iter()) {
            let color = type_color(entry_type);
            let style = if entry_type == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };

            Paragraph::new(entry_type.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color)),
                )
                .render(*cell, buf);
        }
    }
}
