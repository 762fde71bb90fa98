use indie_sync::charts::{BarChart, RadarChart};
use indie_sync::view::clamp_text;
use indie_sync::{PageView, Showcase};
use serde::Serialize;

const TEXT_WIDTH: usize = 78;

#[derive(Serialize)]
struct HeadlessReport<'a> {
    view: PageView,
    radar: Option<&'a RadarChart>,
    bar: Option<&'a BarChart>,
}

pub fn render_json(showcase: &Showcase) -> serde_json::Result<String> {
    let report = HeadlessReport {
        view: showcase.view(),
        radar: showcase.charts().radar().map(|chart| &chart.config),
        bar: showcase.charts().bar().map(|chart| &chart.config),
    };
    serde_json::to_string_pretty(&report)
}

pub fn render_text(showcase: &Showcase) -> String {
    let view = showcase.view();
    let mut lines = vec![
        String::new(),
        "Indie Sync Blueprint".to_string(),
        "====================".to_string(),
    ];

    let tabs = view
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                tab.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("Categories: {tabs}"));
    lines.extend(
        clamp_text(&view.insight, TEXT_WIDTH, None)
            .into_iter()
            .map(|line| format!("  {line}")),
    );

    lines.push("\nBrands:".to_string());
    lines.extend(view.brand_list.iter().map(|entry| {
        let dot = if entry.show_dot { " ●" } else { "" };
        format!("- {}{dot}", entry.label)
    }));

    if let (Some(header), Some(description)) = (&view.header, &view.description) {
        lines.push(format!("\n{} ({})", header.name, header.tag));
        lines.extend(
            clamp_text(&description.text, TEXT_WIDTH, description.clamp_lines)
                .into_iter()
                .map(|line| format!("  {line}")),
        );
    }

    lines.push("\nSongs:".to_string());
    for song in &view.songs {
        lines.push(format!(
            "{} {} | {} | {}",
            song.number, song.title, song.artist, song.vibe
        ));
        lines.push(format!("   Spotify: {}", song.links.spotify));
        lines.push(format!("   Apple:   {}", song.links.apple));
    }

    if let Some(radar) = showcase.charts().radar() {
        lines.push("\nFingerprint:".to_string());
        lines.extend(
            radar
                .config
                .axes
                .iter()
                .zip(radar.config.values)
                .map(|(axis, value)| format!("- {axis}: {value}")),
        );
    }

    if let Some(bar) = showcase.charts().bar() {
        lines.push("\nGenre relevance:".to_string());
        lines.extend(bar.config.bars().into_iter().map(|genre| {
            let value = genre.value.map_or_else(|| "-".to_string(), |v| v.to_string());
            format!("- {}: {value}", genre.label)
        }));
    }

    lines.join("\n")
}
