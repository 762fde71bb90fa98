use indie_sync::theme::ACCENT;
use indie_sync::view::{clamp_text, CompactEntry, PageView};
use indie_sync::{ErrorPanel, Showcase, Theme};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::charts::{color, render_genres, render_radar};

fn base_style(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().fg(Color::White).bg(Color::Rgb(15, 23, 36)),
        Theme::Light => Style::default()
            .fg(Color::Rgb(17, 24, 39))
            .bg(Color::Rgb(250, 250, 249)),
    }
}

fn secondary(theme: Theme) -> Style {
    Style::default().fg(color(theme.palette().text))
}

fn panel(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(theme.palette().grid)))
}

pub fn render_showcase(showcase: &Showcase, f: &mut Frame<'_>, area: Rect) {
    let view = showcase.view();
    f.render_widget(Block::default().style(base_style(view.theme)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(&view, f, layout[0]);
    render_insight(&view, f, layout[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(43),
            Constraint::Percentage(35),
        ])
        .split(layout[2]);

    render_brand_list(&view, f, body[0]);
    render_brand_detail(&view, f, body[1]);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(body[2]);

    render_radar(
        showcase.charts().radar().map(|chart| &chart.config),
        f,
        charts[0],
    );
    render_genres(
        showcase.charts().bar().map(|chart| &chart.config),
        f,
        charts[1],
    );

    render_shortcuts(&view, f, layout[3]);

    if view.sheet_open {
        render_brand_sheet(&view, f, area);
    }
}

fn render_tabs(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let titles = view
        .tabs
        .iter()
        .map(|tab| TextLine::from(tab.label.to_uppercase()))
        .collect::<Vec<_>>();
    let selected = view.tabs.iter().position(|tab| tab.active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(panel("Categories", view.theme))
        .select(selected)
        .style(secondary(view.theme))
        .highlight_style(
            Style::default()
                .fg(color(ACCENT))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_insight(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(view.insight.as_str())
        .block(panel("Insight", view.theme))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_brand_list(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let block = panel("Brands", view.theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if view.brand_list.is_empty() {
        let paragraph = Paragraph::new("No brands in this category")
            .alignment(Alignment::Center)
            .style(secondary(view.theme));
        f.render_widget(paragraph, inner);
        return;
    }

    let mut lines = Vec::new();
    for entry in &view.brand_list {
        let dot = if entry.show_dot { " ●" } else { "" };
        let style = if entry.active {
            Style::default()
                .fg(Color::White)
                .bg(color(ACCENT))
                .add_modifier(Modifier::BOLD)
        } else {
            secondary(view.theme).add_modifier(Modifier::BOLD)
        };
        lines.push(TextLine::from(Span::styled(
            format!(" {}{dot}", entry.label),
            style,
        )));
        lines.push(TextLine::from(""));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn render_brand_detail(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let block = panel("Brand", view.theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (Some(header), Some(description)) = (&view.header, &view.description) else {
        let paragraph = Paragraph::new("Pick a brand to see its songs")
            .alignment(Alignment::Center)
            .style(secondary(view.theme));
        f.render_widget(paragraph, inner);
        return;
    };

    let text_width = usize::from(inner.width.saturating_sub(1));
    let description_lines = clamp_text(&description.text, text_width, description.clamp_lines);
    let description_height = u16::try_from(description_lines.len() + 2).unwrap_or(u16::MAX);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(description_height),
            Constraint::Min(0),
        ])
        .split(inner);

    let header_lines = vec![
        TextLine::from(Span::styled(
            header.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            header.tag.to_uppercase(),
            Style::default().fg(color(ACCENT)),
        )),
    ];
    f.render_widget(Paragraph::new(Text::from(header_lines)), layout[0]);

    let mut lines: Vec<TextLine<'_>> = description_lines.into_iter().map(TextLine::from).collect();
    lines.push(TextLine::from(Span::styled(
        format!("[r] {}", description.toggle_label),
        Style::default()
            .fg(color(ACCENT))
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(
        Paragraph::new(Text::from(lines)).style(secondary(view.theme)),
        layout[1],
    );

    render_songs(view, f, layout[2]);
}

fn render_songs(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let mut lines = Vec::new();
    lines.push(TextLine::from(Span::styled(
        "SONGS",
        secondary(view.theme).add_modifier(Modifier::BOLD),
    )));

    for song in &view.songs {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(vec![
            Span::styled(format!("{}  ", song.number), secondary(view.theme)),
            Span::styled(
                song.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(TextLine::from(vec![
            Span::raw("    "),
            Span::styled(song.artist.clone(), secondary(view.theme)),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", song.vibe.to_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .bg(color(view.theme.palette().grid)),
            ),
        ]));
        lines.push(TextLine::from(vec![
            Span::styled("    Spotify ", secondary(view.theme)),
            Span::styled(
                song.links.spotify.clone(),
                Style::default().fg(Color::Rgb(29, 185, 84)),
            ),
        ]));
        lines.push(TextLine::from(vec![
            Span::styled("    Apple   ", secondary(view.theme)),
            Span::styled(
                song.links.apple.clone(),
                Style::default().fg(Color::Rgb(250, 35, 59)),
            ),
        ]));
    }

    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_shortcuts(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled("←/→ 1-9", Style::default().fg(color(ACCENT))),
        Span::raw(" category  "),
        Span::styled("↑/↓", Style::default().fg(color(ACCENT))),
        Span::raw(" brand  "),
        Span::styled("r", Style::default().fg(color(ACCENT))),
        Span::raw(" read more  "),
        Span::styled("b", Style::default().fg(color(ACCENT))),
        Span::raw(" brand search  "),
        Span::styled("t", Style::default().fg(color(ACCENT))),
        Span::raw(format!(" theme ({})", view.theme.label())),
    ]);
    f.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(secondary(view.theme)),
        area,
    );
}

fn compact_line(entry: &CompactEntry) -> TextLine<'static> {
    let marker = if entry.highlighted { "▸ " } else { "  " };
    let style = if entry.highlighted {
        Style::default()
            .fg(Color::White)
            .bg(color(ACCENT))
            .add_modifier(Modifier::BOLD)
    } else if entry.active {
        Style::default()
            .fg(color(ACCENT))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    TextLine::from(Span::styled(format!("{marker}{}", entry.label), style))
}

fn render_brand_sheet(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title("Select Brand")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(ACCENT)))
        .style(base_style(view.theme));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let search = TextLine::from(vec![
        Span::styled("Search: ", secondary(view.theme)),
        Span::styled(
            format!("{}_", view.search),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(search), layout[0]);

    let lines: Vec<TextLine<'static>> = view
        .compact_list
        .iter()
        .filter(|entry| entry.visible)
        .map(compact_line)
        .collect();

    if lines.is_empty() {
        let paragraph = Paragraph::new("No matching brands")
            .alignment(Alignment::Center)
            .style(secondary(view.theme));
        f.render_widget(paragraph, layout[1]);
    } else {
        f.render_widget(Paragraph::new(Text::from(lines)), layout[1]);
    }

    let hint = Paragraph::new("Enter select  Esc close")
        .alignment(Alignment::Center)
        .style(secondary(view.theme));
    f.render_widget(hint, layout[2]);
}

pub fn render_error(panel: &ErrorPanel, f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::from(Span::styled(
            panel.title,
            Style::default()
                .fg(Color::Rgb(248, 113, 113))
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(panel.hint, Style::default().fg(Color::Gray))),
        TextLine::from(""),
        TextLine::from(Span::styled(
            panel.detail.clone(),
            Style::default().fg(Color::Rgb(252, 165, 165)),
        )),
    ];

    let box_area = centered_rect(70, 40, area);
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, box_area);
}

pub fn render_loading(f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Text::from(TextLine::from(format!(
        "Loading {}...",
        indie_sync::DEFAULT_DATA_PATH
    ))))
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
