use indie_sync::charts::{BarChart as GenreChart, RadarChart};
use indie_sync::Rgb;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

const RADAR_BOUNDS: [f64; 2] = [-1.4, 1.4];

pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn empty_chart(title: &'static str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new("No brand selected")
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Fingerprint radar on the left, axis scores on the right.
pub fn render_radar(radar: Option<&RadarChart>, f: &mut Frame<'_>, area: Rect) {
    let Some(radar) = radar else {
        empty_chart("Sonic Fingerprint", f, area);
        return;
    };

    let block = Block::default()
        .title("Sonic Fingerprint")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(radar.palette.grid)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(22)])
        .split(inner);

    let grid = color(radar.palette.grid);
    let angle_lines = color(radar.palette.angle_lines);
    let accent = color(radar.border);
    let point = color(radar.point_border);
    let directions = RadarChart::axis_directions();
    let vertices = radar.vertices(1.0);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for step in 1..=4 {
                    let ring = f64::from(step) / 4.0;
                    for (index, (x1, y1)) in directions.iter().enumerate() {
                        let (x2, y2) = directions[(index + 1) % directions.len()];
                        ctx.draw(&CanvasLine {
                            x1: x1 * ring,
                            y1: y1 * ring,
                            x2: x2 * ring,
                            y2: y2 * ring,
                            color: grid,
                        });
                    }
                }
                for (dx, dy) in directions {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: dx,
                        y2: dy,
                        color: angle_lines,
                    });
                }

                ctx.layer();

                for (index, (x1, y1)) in vertices.iter().enumerate() {
                    let (x2, y2) = vertices[(index + 1) % vertices.len()];
                    ctx.draw(&CanvasLine {
                        x1: *x1,
                        y1: *y1,
                        x2,
                        y2,
                        color: accent,
                    });
                }
                for (x, y) in vertices {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: 0.03,
                        color: point,
                    });
                }
            })
            .x_bounds(RADAR_BOUNDS)
            .y_bounds(RADAR_BOUNDS),
        split[0],
    );

    let text = Style::default().fg(color(radar.palette.text));
    let legend: Vec<TextLine<'_>> = radar
        .axes
        .iter()
        .zip(radar.values)
        .map(|(axis, value)| {
            TextLine::from(vec![
                Span::styled(format!("{axis:<14}"), text),
                Span::styled(
                    format!("{value:>5.0}"),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), split[1]);
}

pub fn render_genres(chart: Option<&GenreChart>, f: &mut Frame<'_>, area: Rect) {
    let Some(chart) = chart else {
        empty_chart("Genre Relevance", f, area);
        return;
    };

    let bars: Vec<Bar<'_>> = chart
        .bars()
        .into_iter()
        .map(|bar| {
            let text_value = bar
                .value
                .map_or_else(|| "-".to_string(), |value| value.to_string());
            Bar::default()
                .value(bar.value.unwrap_or(0))
                .text_value(text_value)
                .label(TextLine::from(bar.label))
                .style(Style::default().fg(color(bar.color)))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .bg(color(bar.color))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let widget = BarChart::default()
        .block(
            Block::default()
                .title(chart.label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(chart.palette.grid))),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_width(1)
        .bar_gap(1)
        .label_style(Style::default().fg(color(chart.palette.text)));

    f.render_widget(widget, area);
}
