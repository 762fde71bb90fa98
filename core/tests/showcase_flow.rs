use indie_sync::{load_response, ErrorPanel, LoadError, Showcase, FINGERPRINT_AXES};

const SINGLE_CATEGORY: &str = r#"{
    "categories": {
        "pop": {
            "label": "Pop",
            "insight": "Hooks travel.",
            "brands": [{
                "name": "Brand A",
                "tag": "Beverage",
                "desc": "Fizzy.",
                "fingerprint": [80, 60, 70, 90, 50],
                "genres": ["Pop", "Dance"],
                "songs": [{"title": "X", "artist": "Y", "vibe": "Upbeat"}]
            }]
        }
    }
}"#;

#[test]
fn loaded_catalog_renders_default_selection() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_response(200, SINGLE_CATEGORY)?;
    let showcase = Showcase::new(catalog)?;
    let view = showcase.view();

    let tab = view.active_tab().ok_or("no active tab")?;
    assert_eq!(tab.label, "Pop");
    assert_eq!(view.tabs.len(), 1);

    assert_eq!(view.brand_list.len(), 1);
    let entry = view.active_brand_entry().ok_or("no active brand")?;
    assert_eq!(entry.label, "BRAND A");

    assert_eq!(view.songs.len(), 1);
    let song = &view.songs[0];
    assert_eq!(song.title, "X");
    assert_eq!(song.artist, "Y");
    assert_eq!(song.vibe, "Upbeat");
    assert!(song.links.spotify.contains("X%20Y"));
    assert!(song.links.apple.contains("X%20Y"));

    let radar = showcase.charts().radar().ok_or("no radar chart")?;
    assert_eq!(radar.config.values, [80.0, 60.0, 70.0, 90.0, 50.0]);
    assert_eq!(radar.config.axes, FINGERPRINT_AXES);

    let bar = showcase.charts().bar().ok_or("no bar chart")?;
    assert_eq!(bar.config.labels, ["Pop", "Dance"]);
    assert_eq!(bar.config.values, [90, 70]);
    Ok(())
}

#[test]
fn not_found_becomes_error_panel() {
    let error = match load_response(404, "") {
        Ok(_) => panic!("a 404 must not produce a catalog"),
        Err(error) => error,
    };
    assert_eq!(error, LoadError::Status(404));

    let panel = ErrorPanel::from(&error);
    assert_eq!(panel.title, "Failed to load data");
    assert!(panel.detail.contains("404"));
}

#[test]
fn view_serializes_for_headless_output() -> Result<(), Box<dyn std::error::Error>> {
    let showcase = Showcase::new(load_response(200, SINGLE_CATEGORY)?)?;
    let json = serde_json::to_value(showcase.view())?;

    assert_eq!(json["tabs"][0]["label"], "Pop");
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["description"]["toggle_label"], "Read More");
    Ok(())
}
