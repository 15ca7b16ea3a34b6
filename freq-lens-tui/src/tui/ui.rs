use crate::tui::app::{App, Focus, View};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    render_topbar(frame, app, chunks[0], theme);
    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(chunks[1]);
    render_sidebar(frame, app, mid[0], theme);
    render_main(frame, app, mid[1], theme);
    render_bottombar(frame, app, chunks[2], theme);
    if app.view == View::Help {
        render_help(frame, app, area);
    }
}

fn render_topbar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let total_obs: usize = app.columns.iter().map(|c| c.values.len()).sum();
    let info = format!(
        " {} | {} numeric columns | {} observations",
        app.input_path,
        app.columns.len(),
        total_obs
    );
    frame.render_widget(
        Paragraph::new(info).style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus == Focus::Sidebar;
    let search_suffix = if app.sidebar_searching {
        format!("/{}_", app.sidebar_search)
    } else if !app.sidebar_search.is_empty() {
        format!("/{}", app.sidebar_search)
    } else {
        String::new()
    };
    let title = format!("Columns{search_suffix}");
    let block = Block::default().borders(Borders::ALL).title(title).border_style(
        if focused {
            Style::default().fg(theme.highlight)
        } else {
            Style::default()
        },
    );
    let indices = app.filtered_column_indices();
    let items: Vec<ListItem> = indices
        .iter()
        .map(|&i| {
            let col = &app.columns[i];
            let skip_span = if col.skipped_cells > 0 {
                Span::styled(
                    format!(" ({} skip)", col.skipped_cells),
                    Style::default().fg(theme.warning),
                )
            } else {
                Span::raw("")
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<14}", truncate(&col.name, 14))),
                Span::styled(
                    format!("{:>6}", col.values.len()),
                    Style::default().fg(theme.numeric),
                ),
                skip_span,
            ]))
        })
        .collect();
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.sidebar_selected.min(items.len().saturating_sub(1))));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_main(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    match app.view {
        View::Distribution | View::Help => render_distribution(frame, app, area, theme),
        View::SortedData => render_sorted_data(frame, app, area, theme),
        View::Summary => render_summary(frame, app, area, theme),
    }
}

fn render_distribution(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(dist) = app.selected_distribution() else {
        frame.render_widget(
            Paragraph::new("No distribution available.")
                .block(Block::default().borders(Borders::ALL).title("Distribution")),
            area,
        );
        return;
    };
    let decimals = app.config.display.decimals;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let tallied = dist.total_frequency();
    let n = dist.sorted_data.len() as u64;
    let tail_note = if tallied < n {
        Span::styled(
            format!("  tallied {tallied}/{n} (tail gap)"),
            Style::default().fg(theme.warning),
        )
    } else {
        Span::styled(format!("  tallied {tallied}"), Style::default().fg(theme.success))
    };
    let audit = vec![
        Line::from(format!(
            "n = {}   min {:.decimals$}   max {:.decimals$}   range {:.decimals$}",
            n, dist.min_value, dist.max_value, dist.range
        )),
        Line::from(format!(
            "classes {}  (Sturges raw {:.3})",
            dist.number_of_classes, dist.raw_number_of_classes
        )),
        Line::from(vec![
            Span::raw(format!(
                "width {}  (raw {:.3})",
                dist.class_width, dist.raw_class_width
            )),
            tail_note,
        ]),
    ];
    frame.render_widget(
        Paragraph::new(audit).block(Block::default().borders(Borders::ALL).title("Distribution")),
        chunks[0],
    );

    let header = Row::new(
        ["#", "Limits", "Edges", "Midpoint", "Freq"]
            .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))),
    );
    let max_freq = dist.classes.iter().map(|c| c.frequency).max().unwrap_or(0);
    let rows: Vec<Row> = dist
        .classes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let bar_width = if max_freq > 0 {
                (c.frequency * 20 / max_freq) as usize
            } else {
                0
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(format!(
                    "{:.decimals$} - {:.decimals$}",
                    c.lower_limit, c.upper_limit
                )),
                Cell::from(format!(
                    "{:.decimals$} - {:.decimals$}",
                    c.lower_edge, c.upper_edge
                )),
                Cell::from(format!("{:.decimals$}", c.midpoint)),
                Cell::from(Line::from(vec![
                    Span::raw(format!("{:>6} ", c.frequency)),
                    Span::styled("▇".repeat(bar_width), Style::default().fg(theme.numeric)),
                ])),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(22),
            Constraint::Length(22),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Classes"));
    frame.render_widget(table, chunks[1]);
}

fn render_sorted_data(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(dist) = app.selected_distribution() else {
        frame.render_widget(
            Paragraph::new("No data.").block(Block::default().borders(Borders::ALL).title("Sorted Data (S)")),
            area,
        );
        return;
    };
    let decimals = app.config.display.decimals;
    let max_rows = app.config.display.max_rows_preview;
    let shown = dist
        .sorted_data
        .iter()
        .skip(app.data_scroll)
        .take(max_rows)
        .map(|v| format!("{v:.decimals$}"))
        .collect::<Vec<_>>()
        .join(", ");
    let title = format!(
        "Sorted Data (S) — {} values, from #{}",
        dist.sorted_data.len(),
        app.data_scroll + 1
    );
    frame.render_widget(
        Paragraph::new(shown)
            .style(Style::default().fg(theme.numeric))
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(stats) = app.selected_summary() else {
        frame.render_widget(
            Paragraph::new("No summary available.")
                .block(Block::default().borders(Borders::ALL).title("Summary (U)")),
            area,
        );
        return;
    };
    let decimals = app.config.display.decimals;
    let skipped = app.selected_column().map(|c| c.skipped_cells).unwrap_or(0);
    let lines = vec![
        Line::from(format!("Count:    {}", stats.count)),
        Line::from(format!("Skipped:  {skipped}")),
        Line::from(format!("Mean:     {:.decimals$}", stats.mean)),
        Line::from(format!("Stddev:   {:.decimals$}", stats.stddev)),
        Line::from(format!("Median:   {:.decimals$}", stats.median)),
        Line::from(format!("Min:      {:.decimals$}", stats.min)),
        Line::from(format!("Max:      {:.decimals$}", stats.max)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(theme.fg))
            .block(Block::default().borders(Borders::ALL).title("Summary (U)")),
        area,
    );
}

fn render_bottombar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(app.status_msg.as_str()).style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        "q        quit",
        "?        toggle this help",
        "Tab      switch focus sidebar/main",
        "j/k      move selection / scroll",
        "Enter    show distribution table",
        "S        show sorted data",
        "U        show summary statistics",
        "/        search columns",
        "o        cycle sidebar sort (name/count/skipped)",
        "g        jump to top of sorted data",
        "Esc      back to sidebar",
    ];
    let items: Vec<Line> = lines
        .iter()
        .skip(app.help_scroll)
        .map(|l| Line::from(*l))
        .collect();
    let popup = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(items).block(Block::default().borders(Borders::ALL).title("Help (?)")),
        popup,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
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
        .split(vert[1])[1]
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
