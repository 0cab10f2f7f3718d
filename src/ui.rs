//! Terminal drawing: the character grid, the detail overlay and popups

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_TITLE;
use crate::messages::{OverlayView, RenderState};
use crate::models::Entry;

/// Rows taken by one grid card, borders included
pub const CARD_HEIGHT: u16 = 3;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Grid columns for a terminal width (1 to 4, like responsive breakpoints)
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        100..=139 => 3,
        _ => 4,
    }
}

fn spinner(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

pub fn draw_ui(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Grid
            Constraint::Length(1), // Page controls
        ])
        .split(area);

    draw_title(f, state, chunks[0], tick);
    draw_grid(f, state, chunks[1], tick);
    draw_controls(f, state, chunks[2]);

    if let Some(overlay) = &state.overlay {
        draw_overlay(f, overlay, area, tick);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title(f: &mut Frame, state: &RenderState, area: Rect, tick: usize) {
    let mut spans = vec![
        Span::styled(format!(" {} ", APP_TITLE), Style::default().fg(Color::Yellow).bold()),
        Span::styled(format!(" Page {}", state.page), Style::default().fg(Color::Gray)),
    ];
    if state.total_count > 0 {
        spans.push(Span::styled(
            format!(" · {} characters", state.total_count),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if state.is_loading {
        spans.push(Span::styled(
            format!(" {}", spinner(tick)),
            Style::default().fg(Color::Cyan),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_grid(f: &mut Frame, state: &RenderState, area: Rect, tick: usize) {
    if state.entries.is_empty() {
        let text = if state.is_loading {
            format!("{} Loading characters...", spinner(tick))
        } else {
            String::from("No characters to show.")
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    }

    let columns = grid_columns(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    // Scroll so the highlighted card stays on screen
    let cursor_row = state.cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let rows: Vec<&[Entry]> = state
        .entries
        .chunks(columns)
        .skip(first_row)
        .take(visible_rows)
        .collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows.len()])
        .split(area);

    for (r, (row, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (c, entry) in row.iter().enumerate() {
            let index = (first_row + r) * columns + c;
            f.render_widget(card(entry, index == state.cursor), cells[c]);
        }
    }
}

fn card(entry: &Entry, highlighted: bool) -> Paragraph<'_> {
    let (border_style, text_style) = if highlighted {
        (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::White).bold(),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default().fg(Color::Gray))
    };

    Paragraph::new(entry.name.as_str())
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
}

/// A page control, greyed out when disabled
pub fn control_span(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Black).bg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!(" {} ", label), style)
}

fn draw_controls(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" "),
        control_span("Previous", state.can_go_previous),
        Span::raw(" "),
        control_span("Next", state.can_go_next),
        Span::styled(
            "  ←↑↓→ move | Enter details | p/n page | ?:help | q:quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn attribute<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

/// Lines of the Detail Overlay body
pub fn overlay_lines(overlay: &OverlayView, tick: usize) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    if overlay.is_loading {
        lines.push(Line::from(format!("{} Loading...", spinner(tick))).centered());
        return lines;
    }

    let Some(entry) = &overlay.entry else {
        lines.push(Line::raw("No character selected"));
        return lines;
    };

    lines.push(Line::from(Span::styled(entry.name.as_str(), Style::default().bold())));
    lines.push(Line::raw(""));
    lines.push(attribute("Gender", entry.gender.clone()));
    lines.push(attribute("Birth Year", entry.birth_year.clone()));
    lines.push(attribute("Hair Color", entry.hair_color.clone()));
    lines.push(attribute("Height", format!("{} cm", entry.height)));
    lines.push(attribute("Mass", format!("{} kg", entry.mass)));
    lines.push(attribute("Skin Color", entry.skin_color.clone()));

    if let Some(place) = &overlay.homeworld {
        lines.push(attribute("Homeworld", place.name.clone()));
    }

    if !overlay.films.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Movies:", Style::default().bold())));
        for film in &overlay.films {
            lines.push(Line::raw(format!("  • {}", film.title)));
        }
    }

    lines
}

fn draw_overlay(f: &mut Frame, overlay: &OverlayView, area: Rect, tick: usize) {
    let popup_area = centered_rect(66, 80, area);

    let mut lines = overlay_lines(overlay, tick);
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(" Close ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::styled(" Esc", Style::default().fg(Color::DarkGray)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Character ")
        .style(Style::default().bg(Color::Black));

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 STAR WARS CHARACTERS - Keyboard Shortcuts

 GRID
   ← → ↑ ↓ / h l k j  Move between cards
   Enter              Show character details

 PAGES
   n / PageDown       Next page
   p / PageUp         Previous page

 DETAILS
   Esc / Enter / c    Close

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
