use serde::Serialize;

use crate::catalog::{Brand, FINGERPRINT_AXES};
use crate::theme::{Palette, Rgb, Theme, ACCENT, ACCENT_DEEP, NAVY, WHITE};

/// Bar lengths used for every brand, whatever its genres are.
pub const GENRE_RELEVANCE: [u64; 3] = [90, 70, 50];
pub const GENRE_BAR_COLORS: [Rgb; 3] = [ACCENT, ACCENT_DEEP, NAVY];
pub const RADAR_FILL_OPACITY: f64 = 0.2;
pub const RADAR_SUGGESTED_MIN: f64 = 0.0;
pub const RADAR_SUGGESTED_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub label: String,
    pub axes: [&'static str; 5],
    pub values: [f64; 5],
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub fill: Rgb,
    pub fill_opacity: f64,
    pub border: Rgb,
    pub point_border: Rgb,
    pub palette: Palette,
}

impl RadarChart {
    /// Top of the value scale: the suggested maximum, grown to fit larger scores.
    pub fn scale_max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(self.suggested_max, f64::max)
    }

    /// Unit direction of each axis, first axis at 12 o'clock, then clockwise.
    pub fn axis_directions() -> [(f64, f64); 5] {
        let step = std::f64::consts::TAU / 5.0;
        let mut directions = [(0.0, 0.0); 5];
        for (index, direction) in directions.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let angle = std::f64::consts::FRAC_PI_2 - step * index as f64;
            *direction = (angle.cos(), angle.sin());
        }
        directions
    }

    /// Polygon corners around the origin (y up) for a plot of the given radius.
    pub fn vertices(&self, radius: f64) -> [(f64, f64); 5] {
        let scale = self.scale_max();
        let mut points = [(0.0, 0.0); 5];
        for ((point, (dx, dy)), value) in points
            .iter_mut()
            .zip(Self::axis_directions())
            .zip(self.values)
        {
            let ratio = if scale > 0.0 {
                (value - self.suggested_min).max(0.0) / (scale - self.suggested_min)
            } else {
                0.0
            };
            *point = (dx * radius * ratio, dy * radius * ratio);
        }
        points
    }
}

/// One horizontal bar; `value` is `None` for genres past the relevance triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreBar {
    pub label: String,
    pub value: Option<u64>,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub horizontal: bool,
    pub palette: Palette,
}

impl BarChart {
    pub fn bars(&self) -> Vec<GenreBar> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| GenreBar {
                label: label.clone(),
                value: self.values.get(index).copied(),
                color: GENRE_BAR_COLORS
                    .get(index)
                    .copied()
                    .unwrap_or(self.palette.grid),
            })
            .collect()
    }
}

pub fn build_radar(brand: &Brand, theme: Theme) -> RadarChart {
    RadarChart {
        label: brand.name.clone(),
        axes: FINGERPRINT_AXES,
        values: brand.fingerprint,
        suggested_min: RADAR_SUGGESTED_MIN,
        suggested_max: RADAR_SUGGESTED_MAX,
        fill: ACCENT,
        fill_opacity: RADAR_FILL_OPACITY,
        border: ACCENT,
        point_border: WHITE,
        palette: theme.palette(),
    }
}

pub fn build_bar(brand: &Brand, theme: Theme) -> BarChart {
    let count = brand.genres.len().min(GENRE_RELEVANCE.len());
    BarChart {
        label: "Relevance",
        labels: brand.genres.clone(),
        values: GENRE_RELEVANCE[..count].to_vec(),
        horizontal: true,
        palette: theme.palette(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance<T> {
    pub id: u64,
    pub config: T,
}

/// Owns at most one live chart for a canvas.
#[derive(Debug, Clone)]
pub struct ChartSlot<T> {
    name: &'static str,
    live: Option<ChartInstance<T>>,
}

impl<T> ChartSlot<T> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, live: None }
    }

    pub const fn live(&self) -> Option<&ChartInstance<T>> {
        self.live.as_ref()
    }

    /// Installs `instance`, destroying whatever was live. Returns whether one was destroyed.
    pub fn replace(&mut self, instance: ChartInstance<T>) -> bool {
        let destroyed = self.destroy();
        self.live = Some(instance);
        destroyed
    }

    pub fn destroy(&mut self) -> bool {
        match self.live.take() {
            Some(prior) => {
                log::debug!("destroying {} chart #{}", self.name, prior.id);
                true
            }
            None => false,
        }
    }
}

/// Rebuilds both charts from scratch on every selection or theme change.
#[derive(Debug, Clone)]
pub struct ChartAdapter {
    radar: ChartSlot<RadarChart>,
    bar: ChartSlot<BarChart>,
    next_id: u64,
    destroyed: u64,
}

impl Default for ChartAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartAdapter {
    pub const fn new() -> Self {
        Self {
            radar: ChartSlot::new("radar"),
            bar: ChartSlot::new("bar"),
            next_id: 1,
            destroyed: 0,
        }
    }

    pub fn render(&mut self, brand: Option<&Brand>, theme: Theme) {
        let Some(brand) = brand else {
            self.clear();
            return;
        };

        let radar = ChartInstance {
            id: self.allocate_id(),
            config: build_radar(brand, theme),
        };
        let bar = ChartInstance {
            id: self.allocate_id(),
            config: build_bar(brand, theme),
        };

        if self.radar.replace(radar) {
            self.destroyed += 1;
        }
        if self.bar.replace(bar) {
            self.destroyed += 1;
        }
    }

    pub fn clear(&mut self) {
        if self.radar.destroy() {
            self.destroyed += 1;
        }
        if self.bar.destroy() {
            self.destroyed += 1;
        }
    }

    pub const fn radar(&self) -> Option<&ChartInstance<RadarChart>> {
        self.radar.live()
    }

    pub const fn bar(&self) -> Option<&ChartInstance<BarChart>> {
        self.bar.live()
    }

    pub const fn destroyed_count(&self) -> u64 {
        self.destroyed
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(genres: &[&str]) -> Brand {
        Brand {
            name: "Brand A".to_string(),
            tag: "Retail".to_string(),
            desc: String::new(),
            songs: Vec::new(),
            fingerprint: [80.0, 60.0, 70.0, 90.0, 50.0],
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn radar_plots_fingerprint_against_fixed_axes() {
        let radar = build_radar(&brand(&["Pop"]), Theme::Dark);

        assert_eq!(
            radar.axes,
            ["Energy", "Emotion", "Uniqueness", "Catchiness", "Lyrical Depth"]
        );
        assert_eq!(radar.values, [80.0, 60.0, 70.0, 90.0, 50.0]);
        assert_eq!(radar.label, "Brand A");
    }

    #[test]
    fn bar_values_are_constant_regardless_of_genres() {
        let one = build_bar(&brand(&["Pop"]), Theme::Dark);
        let two = build_bar(&brand(&["Pop", "Dance"]), Theme::Dark);
        let three = build_bar(&brand(&["Pop", "Dance", "Indie"]), Theme::Dark);

        assert_eq!(one.values, [90]);
        assert_eq!(two.values, [90, 70]);
        assert_eq!(three.values, [90, 70, 50]);
        assert!(three.horizontal);
        assert_eq!(three.label, "Relevance");
    }

    #[test]
    fn fourth_genre_gets_a_label_but_no_value() {
        let chart = build_bar(&brand(&["A", "B", "C", "D"]), Theme::Light);
        let bars = chart.bars();

        assert_eq!(bars.len(), 4);
        assert_eq!(bars[3].label, "D");
        assert_eq!(bars[3].value, None);
        assert_eq!(bars[0].color, ACCENT);
    }

    #[test]
    fn theme_colors_are_baked_into_configs() {
        let dark = build_radar(&brand(&[]), Theme::Dark);
        let light = build_radar(&brand(&[]), Theme::Light);
        assert_ne!(dark.palette, light.palette);
    }

    #[test]
    fn first_vertex_points_straight_up() {
        let radar = build_radar(&brand(&[]), Theme::Dark);
        let vertices = radar.vertices(10.0);

        assert!(vertices[0].0.abs() < 1e-9);
        assert!((vertices[0].1 - 8.0).abs() < 1e-9);
        // Catchiness sits left of centre, below the x axis.
        assert!(vertices[3].0 < 0.0 && vertices[3].1 < 0.0);
    }

    #[test]
    fn scores_above_suggested_max_grow_the_scale() {
        let mut loud = brand(&[]);
        loud.fingerprint = [200.0, 100.0, 0.0, 0.0, 0.0];
        let radar = build_radar(&loud, Theme::Dark);

        assert!((radar.scale_max() - 200.0).abs() < f64::EPSILON);
        assert!((radar.vertices(1.0)[0].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn adapter_keeps_one_live_instance_per_canvas() {
        let mut adapter = ChartAdapter::new();
        let brand = brand(&["Pop"]);

        adapter.render(Some(&brand), Theme::Dark);
        let first_radar = adapter.radar().map(|chart| chart.id);
        assert_eq!(adapter.destroyed_count(), 0);

        adapter.render(Some(&brand), Theme::Light);
        let second_radar = adapter.radar().map(|chart| chart.id);

        assert_ne!(first_radar, second_radar);
        assert_eq!(adapter.destroyed_count(), 2);
        assert_eq!(
            adapter.bar().map(|chart| chart.config.palette),
            Some(Theme::Light.palette())
        );
    }

    #[test]
    fn rendering_nothing_destroys_live_charts() {
        let mut adapter = ChartAdapter::new();
        adapter.render(Some(&brand(&["Pop"])), Theme::Dark);
        adapter.render(None, Theme::Dark);

        assert!(adapter.radar().is_none());
        assert!(adapter.bar().is_none());
        assert_eq!(adapter.destroyed_count(), 2);
    }
}
