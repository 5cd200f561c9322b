use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::detail::DialogView;

use super::App;

pub(super) fn draw_modal(frame: &mut ratatui::Frame, app: &App) {
    let Some(view) = app.view.dialog().view() else {
        return;
    };

    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 22);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(view));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines = body_lines(view);
    let scroll = app.modal_scroll.min(lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

fn modal_title(view: &DialogView) -> Line<'static> {
    Line::from(vec![
        Span::styled(view.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
    ])
}

pub(super) fn body_lines(view: &DialogView) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for (i, section) in view.sections.iter().enumerate() {
        if i > 0 {
            out.push(Line::from(""));
        }
        out.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for l in section.body.lines() {
            out.push(Line::from(l.to_string()));
        }
    }
    if out.is_empty() {
        out.push(Line::from("(no details)"));
    }
    out
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let len = app
        .view
        .dialog()
        .view()
        .map(|v| body_lines(v).len())
        .unwrap_or(0);
    let max = len.saturating_sub(1);

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_detail(),
        KeyCode::Up => app.modal_scroll = app.modal_scroll.saturating_sub(1),
        KeyCode::Down => app.modal_scroll = (app.modal_scroll + 1).min(max),
        KeyCode::PageUp => app.modal_scroll = app.modal_scroll.saturating_sub(10),
        KeyCode::PageDown => app.modal_scroll = (app.modal_scroll + 10).min(max),
        _ => {}
    }
}
