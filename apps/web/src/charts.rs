use indie_sync::charts::{BarChart as GenreChart, RadarChart};
use indie_sync::Rgb;
use ratzilla::ratatui::{
    layout::{Alignment, Direction, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};

const RADAR_X_BOUNDS: [f64; 2] = [-1.6, 1.6];
const RADAR_Y_BOUNDS: [f64; 2] = [-1.3, 1.3];
const RADAR_LABEL_RADIUS: f64 = 1.15;

pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn chart_block(title: &'static str, border: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_empty(f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new("No brand selected")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

pub fn render_radar(radar: Option<&RadarChart>, f: &mut Frame<'_>, area: Rect) {
    let border = radar.map_or(Color::Gray, |radar| color(radar.palette.grid));
    let block = chart_block("Sonic Fingerprint", border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(radar) = radar else {
        render_empty(f, inner);
        return;
    };

    let grid = color(radar.palette.grid);
    let angle_lines = color(radar.palette.angle_lines);
    let text = color(radar.palette.text);
    let accent = color(radar.border);
    let point = color(radar.point_border);

    let directions = RadarChart::axis_directions();
    let vertices = radar.vertices(1.0);
    let column_width =
        (RADAR_X_BOUNDS[1] - RADAR_X_BOUNDS[0]) / f64::from(inner.width.max(1));

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

                for (label, (dx, dy)) in radar.axes.iter().zip(directions) {
                    #[allow(clippy::cast_precision_loss)]
                    let width = label.chars().count() as f64 * column_width;
                    let shift = if dx < -0.1 {
                        width
                    } else if dx.abs() <= 0.1 {
                        width / 2.0
                    } else {
                        0.0
                    };
                    ctx.print(
                        dx.mul_add(RADAR_LABEL_RADIUS, -shift),
                        dy * RADAR_LABEL_RADIUS,
                        TextLine::styled(*label, Style::default().fg(text)),
                    );
                }
            })
            .x_bounds(RADAR_X_BOUNDS)
            .y_bounds(RADAR_Y_BOUNDS),
        inner,
    );
}

pub fn render_genres(chart: Option<&GenreChart>, f: &mut Frame<'_>, area: Rect) {
    let border = chart.map_or(Color::Gray, |chart| color(chart.palette.grid));
    let block = chart_block("Genre Relevance", border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(chart) = chart else {
        render_empty(f, inner);
        return;
    };

    let bars: Vec<Bar<'_>> = chart
        .bars()
        .into_iter()
        .map(|bar| {
            Bar::default()
                .value(bar.value.unwrap_or(0))
                .text_value(bar.value.map(|value| value.to_string()).unwrap_or_default())
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
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_width(1)
        .bar_gap(1)
        .label_style(Style::default().fg(color(chart.palette.text)));

    f.render_widget(widget, inner);
}
