//! Main application view
//!
//! Renders the search form, the recent-searches row, the story table,
//! and the status bar.

use crate::state::AppState;
use crate::view_models::{LastSearchesViewModel, StoryTableViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the main view
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Recent searches
            Constraint::Min(0),    // Story table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_search_form(state, chunks[0], f);
    render_last_searches(state, chunks[1], f);
    render_story_table(state, chunks[2], f);
    render_status_bar(state, chunks[3], f);
}

/// Render the search input field
fn render_search_form(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let block = Block::bordered()
        .border_style(theme.panel_border())
        .title(" Search ");

    let input_line = Line::from(vec![
        Span::styled(state.search.input.clone(), theme.text()),
        Span::styled("█", theme.muted()),
    ]);

    let paragraph = Paragraph::new(input_line).block(block);
    f.render_widget(paragraph, area);
}

/// Render the row of recallable previous searches
fn render_last_searches(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = LastSearchesViewModel::from_history(&state.search.history);

    if vm.entries.is_empty() {
        return;
    }

    let mut spans = vec![Span::styled(" Recent: ", theme.muted())];
    for entry in &vm.entries {
        spans.push(Span::styled(format!("[{}] ", entry.hotkey), theme.key_hint()));
        spans.push(Span::styled(format!("{}  ", entry.term), theme.text()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the story table for the active search
fn render_story_table(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = StoryTableViewModel::from_state(
        &state.story_list,
        state.search.history.active_term(),
        theme,
    );

    let status_line = Line::from(vm.status_text.clone())
        .style(Style::default().fg(vm.status_color))
        .right_aligned();

    let block = Block::bordered()
        .border_style(theme.panel_border())
        .title(vm.title.clone())
        .title(status_line);

    // Errors keep the previous list on screen; an empty list gets a
    // placeholder instead of a bare frame
    if vm.rows.is_empty() {
        let message = if state.story_list.fetch.is_error {
            Line::from(Span::styled(
                "Something went wrong fetching stories.",
                theme.error(),
            ))
        } else if state.story_list.fetch.is_loading {
            Line::from(Span::styled("Loading ...", theme.muted()))
        } else {
            Line::from(Span::styled("No stories found.", theme.muted()))
        };

        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    // Sortable column headers first, URL last (not sortable)
    let header_cells: Vec<Cell> = vm
        .columns
        .iter()
        .map(|column| {
            let style = if column.is_active {
                theme.table_header_active()
            } else {
                theme.table_header()
            };
            Cell::from(column.label.clone()).style(style)
        })
        .chain(std::iter::once(
            Cell::from("URL").style(theme.table_header()),
        ))
        .collect();

    let header = Row::new(header_cells).style(theme.table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row_vm| {
            let style = Style::default().fg(row_vm.fg_color).bg(row_vm.bg_color);

            Row::new(vec![
                Cell::from(row_vm.title.clone()),
                Cell::from(row_vm.author.clone()),
                Cell::from(row_vm.comments.clone()),
                Cell::from(row_vm.points.clone()),
                Cell::from(row_vm.url.clone()).style(theme.muted()),
            ])
            .style(style)
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Percentage(35), // Title
        Constraint::Percentage(18), // Author
        Constraint::Length(10),     // Comments
        Constraint::Length(8),      // Points
        Constraint::Percentage(30), // URL
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = ratatui::widgets::TableState::default();
    table_state.select(Some(vm.selected_index));

    f.render_stateful_widget(table, area, &mut table_state);
}

/// Render the one-line status bar
fn render_status_bar(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(58)])
        .split(area);

    if let Some(message) = &state.status_bar.current {
        let line = Line::from(vec![
            Span::styled(
                format!(" {}: ", message.source),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                message.message.clone(),
                Style::default().fg(theme.status_color(message.kind)),
            ),
        ]);
        f.render_widget(Paragraph::new(line), chunks[0]);
    }

    let hints = Line::from(Span::styled(
        "^T/^A/^O/^P sort · Del dismiss · ^R refresh · Esc quit ",
        theme.muted(),
    ))
    .right_aligned();
    f.render_widget(Paragraph::new(hints), chunks[1]);
}
