use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::table::{MarkerKind, RowDescriptor, TableView};

use super::{App, modal};

const COLUMNS: [&str; 6] = ["", "Usage", "Examples", "Description", "Who can use", "Plugin"];

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_selector(frame, app, chunks[1]);
    if let TableView::Visible(rows) = app.view.table() {
        draw_table(frame, app, rows, chunks[2]);
    }
    draw_footer(frame, app, chunks[3]);

    if app.view.dialog().is_open() {
        modal::draw_modal(frame, app);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled(
            app.theme.logo.clone(),
            Style::default().fg(Color::Black).bg(app.theme.header),
        ),
        Span::raw("  "),
        Span::styled(app.view.address().href(), Style::default().fg(Color::Gray)),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_selector(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let selector = app.view.selector();
    let idx = selector.selected_index();
    let line = Line::from(vec![
        Span::styled("Repo: ", Style::default().fg(Color::Gray)),
        Span::raw("◀ "),
        Span::styled(
            selector.option_label(idx).to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" ▶"),
        Span::styled(
            format!("  ({}/{})", idx + 1, selector.options().len() + 1),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_table(frame: &mut ratatui::Frame, app: &App, rows: &[RowDescriptor], area: Rect) {
    let header = Row::new(COLUMNS.to_vec())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let body: Vec<Row> = rows.iter().map(table_row).collect();
    let widths = [
        Constraint::Length(3),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Percentage(26),
        Constraint::Percentage(14),
        Constraint::Percentage(16),
    ];

    let mut state = TableState::default();
    state.select(Some(app.selected_row.min(rows.len().saturating_sub(1))));

    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Commands"))
        .row_highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(table, area, &mut state);
}

pub(super) fn marker_text(row: &RowDescriptor) -> String {
    row.markers
        .iter()
        .map(|m| match m.kind {
            MarkerKind::Featured => "★",
            MarkerKind::External => "⧉",
        })
        .collect()
}

fn table_row(row: &RowDescriptor) -> Row<'static> {
    let cells = [&row.usage, &row.examples, &row.description, &row.who_can_use];
    let height = cells
        .iter()
        .map(|c| c.lines().len())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut out = vec![ratatui::widgets::Cell::from(marker_text(row))];
    for cell in cells {
        let lines: Vec<Line> = cell.lines().into_iter().map(Line::from).collect();
        out.push(ratatui::widgets::Cell::from(lines));
    }
    out.push(ratatui::widgets::Cell::from(Span::styled(
        row.plugin.name.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    )));

    Row::new(out).height(height as u16)
}

fn draw_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let hint = if app.view.dialog().is_open() {
        "Esc close  ↑/↓ scroll"
    } else if app.view.table().is_hidden() {
        "←/→ repo  q quit"
    } else {
        "←/→ repo  ↑/↓ row  Enter plugin details  q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::Gray))),
        area,
    );
}
