//! Itinerary screen rendering
//!
//! Renders the main view: the day tab bar across the top, the attraction
//! catalog on the left, the currently displayed day on the right, and a
//! hint line at the bottom.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::data::{all_attractions, Attraction, AttractionKind};
use crate::day::DayHandle;

/// Attraction kind to icon mapping
fn kind_icon(kind: &AttractionKind) -> &'static str {
    match kind {
        AttractionKind::Hotel => "\u{1F3E8}",      // 🏨
        AttractionKind::Restaurant => "\u{1F37D}", // 🍽
        AttractionKind::Activity => "\u{1F3AF}",   // 🎯
    }
}

/// Label for a day tab: the day number, plus the calendar date when the
/// trip's start date is known
fn day_label(number: u32, start_date: Option<NaiveDate>) -> String {
    match date_for_day(number, start_date) {
        Some(date) => format!("Day {} \u{00B7} {}", number, date.format("%b %d")),
        None => format!("Day {}", number),
    }
}

/// Calendar date of the day with the given number, counted from day 1
fn date_for_day(number: u32, start_date: Option<NaiveDate>) -> Option<NaiveDate> {
    let start = start_date?;
    start.checked_add_signed(chrono::Duration::days(number as i64 - 1))
}

/// Renders the itinerary screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_day_tabs(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_catalog(frame, app, body[0]);
    render_current_day(frame, app, body[1]);
    render_hints(frame, chunks[2]);
}

/// Renders the tab bar with one entry per day, current day highlighted
fn render_day_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    if app.trip.days().is_empty() {
        spans.push(Span::styled(
            "No days yet",
            Style::default().fg(Color::DarkGray),
        ));
    }

    for (i, day) in app.trip.days().iter().enumerate() {
        let label = format!(" {} ", day_label(day.number(), app.start_date));
        let style = if app.trip.current_index() == Some(i) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
    }

    let block = Block::default().title(" Trip ").borders(Borders::ALL);
    let tabs = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(tabs, area);
}

/// Renders the attraction catalog pane
fn render_catalog(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Catalog;

    let lines: Vec<Line> = all_attractions()
        .iter()
        .enumerate()
        .map(|(i, attraction)| {
            let selected = i == app.catalog_index;
            attraction_line(attraction, selected, focused)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(" Attractions ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the currently displayed day pane
fn render_current_day(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Day;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let Some(day) = app.trip.current_day() else {
        let block = Block::default().title(" Day ").borders(Borders::ALL);
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No days in this trip yet",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press 'a' to add the first day",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut title = format!(" {} ", day_label(day.number(), app.start_date));
    if day.has_remove_button() {
        title.push_str("[x] ");
    }

    let lines: Vec<Line> = if day.attractions().is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nothing planned for this day",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press Enter on the catalog to add an attraction",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        day.attractions()
            .iter()
            .enumerate()
            .map(|(i, attraction)| attraction_line(attraction, i == app.day_index, focused))
            .collect()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Builds a list line for an attraction, with selection highlighting
fn attraction_line(attraction: &Attraction, selected: bool, focused: bool) -> Line<'static> {
    let marker = if selected { "\u{25B6} " } else { "  " }; // ▶
    let style = if selected && focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    Line::from(Span::styled(
        format!("{}{} {}", marker, kind_icon(&attraction.kind), attraction.name),
        style,
    ))
}

/// Renders the one-line key hints at the bottom
fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        " \u{2190}/\u{2192} day \u{00B7} a add day \u{00B7} x delete day \u{00B7} Tab focus \u{00B7} \u{2191}/\u{2193} select \u{00B7} Enter add \u{00B7} r remove \u{00B7} ? help \u{00B7} q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::cli::StartupConfig;
    use crate::data::DayRecord;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let mut app = App::new(StartupConfig {
            server: "http://127.0.0.1:9".to_string(),
            ..StartupConfig::default()
        });
        app.state = AppState::Itinerary;
        app
    }

    fn rendered_content(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_without_days_shows_empty_hints() {
        let app = test_app();
        let content = rendered_content(&app);

        assert!(content.contains("Attractions"), "Should render the catalog");
        assert!(content.contains("No days yet"), "Should flag an empty trip");
        assert!(content.contains("add the first day"));
    }

    #[test]
    fn test_render_with_days_shows_tabs_and_current_day() {
        let mut app = test_app();
        app.trip.add_day(DayRecord { id: 1, number: 1 });
        app.trip.add_day(DayRecord { id: 2, number: 2 });

        let content = rendered_content(&app);

        assert!(content.contains("Day 1"));
        assert!(content.contains("Day 2"));
        assert!(content.contains("Nothing planned for this day"));
    }

    #[test]
    fn test_render_lists_current_day_attractions() {
        let mut app = test_app();
        app.trip.add_day(DayRecord { id: 1, number: 1 });
        app.trip.add_to_current(all_attractions()[4]);

        let content = rendered_content(&app);

        assert!(content.contains(all_attractions()[4].name));
    }

    #[test]
    fn test_day_label_without_start_date() {
        assert_eq!(day_label(3, None), "Day 3");
    }

    #[test]
    fn test_day_label_with_start_date() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        assert_eq!(day_label(1, Some(start)), "Day 1 \u{00B7} Aug 10");
        assert_eq!(day_label(3, Some(start)), "Day 3 \u{00B7} Aug 12");
    }

    #[test]
    fn test_date_for_day_crosses_month_boundary() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            date_for_day(3, Some(start)),
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
    }
}
