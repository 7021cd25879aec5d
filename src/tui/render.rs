use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{InputMode, TuiApp};
use crate::store::KeyValueStore;
use crate::theme::Palette;
use crate::view::{filter_tabs, ListView};

/// Padding inside the list area (1 cell on each side)
const CONTENT_PADDING: u16 = 1;

const TITLE: &str = "To-Do List";

/// Draw the UI.
pub(super) fn draw_ui<S: KeyValueStore>(f: &mut Frame, app: &TuiApp<S>) {
    let size = f.area();
    let palette = app.controller.theme().palette();

    f.render_widget(Clear, size);
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Input
            Constraint::Length(1), // Filter tabs
            Constraint::Min(0),    // List
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(f, chunks[0], app, &palette);
    draw_input(f, chunks[1], app, &palette);
    draw_filters(f, chunks[2], app, &palette);
    draw_list(f, chunks[3], app, &palette);
    draw_footer(f, chunks[4], app, &palette);

    match app.input_mode {
        InputMode::Edit(_) => draw_edit_modal(f, size, app, &palette),
        InputMode::ConfirmDelete(_) => draw_delete_modal(f, size, &palette),
        InputMode::Normal | InputMode::Input => {}
    }
}

/// Title on the left, theme toggle on the right.
fn draw_header<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &TuiApp<S>, palette: &Palette) {
    let theme = app.controller.theme();
    let toggle = format!("[{}] t ", theme.icon());
    let title_width = area.width.saturating_sub(toggle.chars().count() as u16) as usize;

    let line = Line::from(vec![
        Span::styled(
            format!(" {:<width$}", TITLE, width = title_width.saturating_sub(1)),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(toggle, Style::default().fg(palette.text)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(header, area);
}

/// The new-task field.
fn draw_input<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &TuiApp<S>, palette: &Palette) {
    let focused = app.input_mode == InputMode::Input;
    let border_color = if focused { palette.accent } else { palette.border };
    let input = app.controller.input();

    let content = if input.is_empty() && !focused {
        Line::from(Span::styled(
            "Add a new task...",
            Style::default().fg(palette.muted),
        ))
    } else if focused {
        Line::from(Span::styled(
            format!("{}_", input),
            Style::default().fg(palette.text),
        ))
    } else {
        Line::from(Span::styled(input.to_string(), Style::default().fg(palette.text)))
    };

    let title = if focused {
        " New task (Enter to add, Esc to leave) "
    } else {
        " New task (a) "
    };

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .title_style(Style::default().fg(border_color)),
    );
    f.render_widget(widget, area);
}

/// Filter tabs, exactly one highlighted.
fn draw_filters<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &TuiApp<S>, palette: &Palette) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (filter, active)) in filter_tabs(app.controller.filter()).iter().enumerate() {
        let label = format!(" {} {} ", i + 1, filter.label());
        let style = if *active {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// First row to show so the highlighted row stays visible.
pub(super) fn scroll_start(selected: usize, total: usize, height: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let max_start = total - height;
    selected.saturating_sub(height - 1).min(max_start)
}

/// The task list, or the placeholder when nothing matches.
fn draw_list<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &TuiApp<S>, palette: &Palette) {
    let view = app.controller.view();
    let title = format!(
        " Tasks ({}) ",
        match view {
            ListView::Empty(_) => 0,
            ListView::Items(items) => items.len(),
        }
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title)
        .title_style(Style::default().fg(palette.text));
    f.render_widget(block, area);

    let inner = area.inner(Margin {
        horizontal: CONTENT_PADDING + 1,
        vertical: 1,
    });
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let lines: Vec<Line> = match view {
        ListView::Empty(msg) => vec![Line::from(Span::styled(
            *msg,
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ))],
        ListView::Items(items) => {
            let height = inner.height as usize;
            let start = scroll_start(app.selected, items.len(), height);
            items
                .iter()
                .enumerate()
                .skip(start)
                .take(height)
                .map(|(idx, item)| {
                    let is_selected = idx == app.selected && app.input_mode != InputMode::Input;
                    let mut text_style = Style::default().fg(palette.text);
                    if item.completed {
                        text_style = text_style
                            .fg(palette.muted)
                            .add_modifier(Modifier::CROSSED_OUT);
                    }
                    let check_style = if item.completed {
                        Style::default().fg(palette.done)
                    } else {
                        Style::default().fg(palette.text)
                    };
                    let mut line = Line::from(vec![
                        Span::styled(item.checkbox(), check_style),
                        Span::raw(" "),
                        Span::styled(item.text.clone(), text_style),
                    ]);
                    if is_selected {
                        line = line.style(Style::default().bg(palette.selected_bg));
                    }
                    line
                })
                .collect()
        }
    };

    f.render_widget(Paragraph::new(lines), inner);
}

/// Key help, or the last error.
fn draw_footer<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &TuiApp<S>, palette: &Palette) {
    let line = match app.status {
        Some(ref err) => Line::from(Span::styled(
            format!(" error: {}", err),
            Style::default().fg(palette.danger),
        )),
        None => Line::from(Span::styled(
            " a add  space toggle  e edit  d delete  1/2/3 filter  t theme  q quit",
            Style::default().fg(palette.muted),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn draw_edit_modal<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &TuiApp<S>, palette: &Palette) {
    let modal_area = centered(area, 50, 5);
    f.render_widget(Clear, modal_area);

    let text = vec![
        Line::from(Span::styled(
            crate::prompt::EDIT_MESSAGE,
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            format!("{}_", app.edit_buffer),
            Style::default().fg(palette.accent),
        )),
    ];

    let modal = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.background))
            .title(" Edit (Enter to save, Esc to cancel) ")
            .title_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(modal, modal_area);
}

fn draw_delete_modal(f: &mut Frame, area: Rect, palette: &Palette) {
    let modal_area = centered(area, 50, 6);
    f.render_widget(Clear, modal_area);

    let text = vec![
        Line::from(""),
        Line::from(crate::prompt::DELETE_MESSAGE),
        Line::from(Span::styled(
            "[Y]es  [N]o",
            Style::default().fg(palette.accent),
        )),
    ];

    let modal = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.danger))
                .style(Style::default().bg(palette.background))
                .title(" Delete? ")
                .title_style(
                    Style::default()
                        .fg(palette.danger)
                        .add_modifier(Modifier::BOLD),
                ),
        );
    f.render_widget(modal, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::TaskController;
    use crate::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &TuiApp<MemoryStore>) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for row in buffer.content.chunks(buffer.area.width as usize) {
            for cell in row {
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_with(tasks: &[&str]) -> TuiApp<MemoryStore> {
        let mut controller = TaskController::new(MemoryStore::new());
        controller.init().unwrap();
        for text in tasks {
            controller.add_text(text).unwrap();
        }
        TuiApp::new(controller)
    }

    #[test]
    fn test_scroll_start() {
        assert_eq!(scroll_start(0, 5, 10), 0);
        assert_eq!(scroll_start(3, 20, 5), 0);
        assert_eq!(scroll_start(4, 20, 5), 0);
        assert_eq!(scroll_start(5, 20, 5), 1);
        assert_eq!(scroll_start(19, 20, 5), 15);
        assert_eq!(scroll_start(2, 20, 0), 0);
    }

    #[test]
    fn test_renders_placeholder() {
        let app = app_with(&[]);
        let screen = screen(&app);
        assert!(screen.contains("No tasks yet!"));
        assert!(screen.contains("To-Do List"));
    }

    #[test]
    fn test_renders_items_and_checkbox() {
        let mut app = app_with(&["Buy milk", "Walk dog"]);
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        let screen = screen(&app);
        assert!(screen.contains("[x] Buy milk"));
        assert!(screen.contains("[ ] Walk dog"));
        assert!(screen.contains("Tasks (2)"));
    }

    #[test]
    fn test_renders_theme_icon() {
        let mut app = app_with(&[]);
        assert!(screen(&app).contains("\u{263e}"));
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        assert!(screen(&app).contains("\u{2600}"));
    }

    #[test]
    fn test_renders_delete_modal() {
        let mut app = app_with(&["Buy milk"]);
        app.handle_key(KeyCode::Char('d'), KeyModifiers::NONE);
        let screen = screen(&app);
        assert!(screen.contains("Are you sure you want to delete"));
        assert!(screen.contains("[Y]es  [N]o"));
    }

    #[test]
    fn test_renders_edit_modal() {
        let mut app = app_with(&["Buy milk"]);
        app.handle_key(KeyCode::Char('e'), KeyModifiers::NONE);
        let screen = screen(&app);
        assert!(screen.contains("Edit your task:"));
        assert!(screen.contains("Buy milk_"));
    }

    #[test]
    fn test_renders_active_placeholder() {
        let mut app = app_with(&[]);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert!(screen(&app).contains("No active tasks!"));
    }
}
