use indie_sync::theme::ACCENT;
use indie_sync::view::{clamp_text, PageView};
use indie_sync::{ErrorPanel, Showcase, Theme};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::ui::widgets::charts::{color, render_genres, render_radar};
use crate::ui::widgets::popup::centered_rect;

fn accent() -> Style {
    Style::default().fg(color(ACCENT))
}

fn muted(theme: Theme) -> Style {
    Style::default().fg(color(theme.palette().text))
}

fn base(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().fg(Color::White).bg(Color::Rgb(15, 23, 36)),
        Theme::Light => Style::default()
            .fg(Color::Rgb(17, 24, 39))
            .bg(Color::Rgb(250, 250, 249)),
    }
}

fn bordered(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(theme.palette().grid)))
}

pub fn render_showcase(showcase: &Showcase, status: &str, f: &mut Frame<'_>) {
    let view = showcase.view();
    let area = f.area();

    let outer = Block::default()
        .title(" Indie Sync Blueprint ")
        .title_style(accent().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .style(base(view.theme));
    let inner = outer.inner(area).inner(Margin::new(1, 0));
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(inner);

    render_tabs(&view, f, rows[0]);
    f.render_widget(
        Paragraph::new(view.insight.as_str())
            .block(bordered("Insight", view.theme))
            .style(muted(view.theme))
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),
            Constraint::Percentage(45),
            Constraint::Min(30),
        ])
        .split(rows[2]);

    render_brand_list(&view, f, columns[0]);
    render_brand_detail(&view, f, columns[1]);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[2]);
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

    render_status(&view, status, f, rows[3]);

    if view.sheet_open {
        render_brand_sheet(&view, f, area);
    }
}

fn render_tabs(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let titles: Vec<TextLine<'_>> = view
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| TextLine::from(format!("{} {}", index + 1, tab.label.to_uppercase())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(bordered("Categories", view.theme))
        .select(view.tabs.iter().position(|tab| tab.active))
        .style(muted(view.theme))
        .highlight_style(accent().add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .divider(Span::raw("|"));
    f.render_widget(tabs, area);
}

fn render_brand_list(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let block = bordered("Brands", view.theme);
    if view.brand_list.is_empty() {
        f.render_widget(
            Paragraph::new("No brands in this category")
                .block(block)
                .style(muted(view.theme))
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let items: Vec<ListItem<'_>> = view
        .brand_list
        .iter()
        .map(|entry| {
            let dot = if entry.show_dot { " ●" } else { "" };
            let style = if entry.active {
                Style::default()
                    .fg(Color::White)
                    .bg(color(ACCENT))
                    .add_modifier(Modifier::BOLD)
            } else {
                muted(view.theme)
            };
            ListItem::new(format!(" {}{dot}", entry.label)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_brand_detail(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let block = bordered("Brand", view.theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (Some(header), Some(description)) = (&view.header, &view.description) else {
        return;
    };

    let width = usize::from(inner.width.saturating_sub(1));
    let mut lines = vec![
        TextLine::from(Span::styled(
            header.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(header.tag.to_uppercase(), accent())),
        TextLine::from(""),
    ];
    lines.extend(
        clamp_text(&description.text, width, description.clamp_lines)
            .into_iter()
            .map(|line| TextLine::from(Span::styled(line, muted(view.theme)))),
    );
    lines.push(TextLine::from(Span::styled(
        format!("[r] {}", description.toggle_label),
        accent().add_modifier(Modifier::BOLD),
    )));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "SONGS",
        muted(view.theme).add_modifier(Modifier::BOLD),
    )));

    for song in &view.songs {
        lines.push(TextLine::from(vec![
            Span::styled(format!("{} ", song.number), muted(view.theme)),
            Span::styled(song.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" · {}", song.artist), muted(view.theme)),
            Span::styled(format!("  {}", song.vibe.to_uppercase()), accent()),
        ]));
        lines.push(TextLine::from(Span::styled(
            format!("   {}", song.links.spotify),
            Style::default().fg(Color::Rgb(29, 185, 84)),
        )));
        lines.push(TextLine::from(Span::styled(
            format!("   {}", song.links.apple),
            Style::default().fg(Color::Rgb(250, 35, 59)),
        )));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn render_status(view: &PageView, status: &str, f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled(format!("{status}  "), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("←/→", accent()),
        Span::raw(" category "),
        Span::styled("↑/↓", accent()),
        Span::raw(" brand "),
        Span::styled("r", accent()),
        Span::raw(" more "),
        Span::styled("b", accent()),
        Span::raw(" search "),
        Span::styled("t", accent()),
        Span::raw(format!(" {} ", view.theme.label())),
        Span::styled("q", accent()),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(line).style(muted(view.theme)), area);
}

fn render_brand_sheet(view: &PageView, f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Select Brand ")
        .borders(Borders::ALL)
        .border_style(accent())
        .style(base(view.theme));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(TextLine::from(vec![
            Span::styled("Search: ", muted(view.theme)),
            Span::styled(format!("{}_", view.search), Style::default().add_modifier(Modifier::BOLD)),
        ])),
        split[0],
    );

    let items: Vec<ListItem<'_>> = view
        .compact_list
        .iter()
        .filter(|entry| entry.visible)
        .map(|entry| {
            let (marker, style) = if entry.highlighted {
                (
                    "▸ ",
                    Style::default()
                        .fg(Color::White)
                        .bg(color(ACCENT))
                        .add_modifier(Modifier::BOLD),
                )
            } else if entry.active {
                ("  ", accent().add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };
            ListItem::new(format!("{marker}{}", entry.label)).style(style)
        })
        .collect();

    if items.is_empty() {
        f.render_widget(
            Paragraph::new("No matching brands")
                .alignment(Alignment::Center)
                .style(muted(view.theme)),
            split[1],
        );
    } else {
        f.render_widget(List::new(items), split[1]);
    }

    f.render_widget(
        Paragraph::new("Enter select  Esc close")
            .alignment(Alignment::Center)
            .style(muted(view.theme)),
        split[2],
    );
}

pub fn render_error(panel: &ErrorPanel, f: &mut Frame<'_>) {
    let area = centered_rect(70, 40, f.area());
    let lines = vec![
        TextLine::from(Span::styled(
            panel.title,
            Style::default()
                .fg(Color::Rgb(248, 113, 113))
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(panel.hint),
        TextLine::from(""),
        TextLine::from(Span::styled(
            panel.detail.clone(),
            Style::default().fg(Color::Rgb(252, 165, 165)),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled("Press q to quit", Style::default().fg(Color::Gray))),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use indie_sync::{Catalog, LoadError};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_brand_and_status() -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Catalog::from_json(
            r#"{"categories": {"pop": {"label": "Pop", "insight": "Hooks.", "brands": [
                {"name": "Brand A", "tag": "Soda", "fingerprint": [10, 20, 30, 40, 50],
                 "genres": ["Pop"], "songs": [{"title": "X", "artist": "Y", "vibe": "Up"}]}
            ]}}}"#,
        )?;
        let showcase = Showcase::new(catalog)?;
        let mut terminal = Terminal::new(TestBackend::new(140, 40))?;

        terminal.draw(|f| render_showcase(&showcase, "Showing Pop", f))?;
        let text = screen_text(&terminal);

        assert!(text.contains("BRAND A"));
        assert!(text.contains("Showing Pop"));
        assert!(text.contains("Sonic Fingerprint"));
        Ok(())
    }

    #[test]
    fn draws_error_panel() -> Result<(), Box<dyn std::error::Error>> {
        let panel = ErrorPanel::from(&LoadError::Status(404));
        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;

        terminal.draw(|f| render_error(&panel, f))?;

        assert!(screen_text(&terminal).contains("Failed to load data"));
        Ok(())
    }
}
