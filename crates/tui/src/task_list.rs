//! Read-only list of open tasks.

use std::fmt::Display;

use brainlogger_core::types::Timestamp;
use chrono::{Local, TimeZone};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::types::LogEntry;

pub const HEADING: &str = "Open Tasks";

/// Completion marker. Display only; selecting it does nothing.
pub const OPEN_MARKER: &str = "○";

/// `M/D` in the given zone, without zero padding.
pub fn short_date<Tz>(timestamp: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%-m/%-d").to_string()
}

pub struct TaskList<'a> {
    pub tasks: &'a [LogEntry],
}

impl Widget for TaskList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.tasks.is_empty() || area.height == 0 {
            return;
        }

        Paragraph::new(HEADING)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(Rect { height: 1, ..area }, buf);

        let rows = (area.y + 1..area.bottom()).zip(self.tasks);
        for (y, task) in rows {
            let date = short_date(&task.timestamp, &Local);
            let row = Rect::new(area.x, y, area.width, 1);
            let [text_area, date_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(date.len() as u16 + 1)])
                    .areas(row);

            Paragraph::new(Line::from(vec![
                Span::styled(OPEN_MARKER, Style::default().fg(Color::Blue)),
                Span::raw(" "),
                Span::raw(task.content.replace('\n', " ")),
            ]))
            .render(text_area, buf);

            Paragraph::new(date)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray))
                .render(date_area, buf);
        }
    }
}
