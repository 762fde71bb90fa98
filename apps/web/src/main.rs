mod charts;
mod dashboard;
mod input;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use indie_sync::{Catalog, ErrorPanel, LoadError, Showcase, Theme, DEFAULT_DATA_PATH};
use ratzilla::ratatui::{
    layout::Margin,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

enum LoadState {
    Loading,
    Ready(Box<Showcase>),
    Failed(LoadError),
}

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(LoadState::Loading));

    spawn_local(fetch_catalog(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            let mut state = state.borrow_mut();
            let LoadState::Ready(showcase) = &mut *state else {
                return;
            };
            let Some(action) = input::action_for_key(event.code, showcase.ui().sheet_open)
            else {
                return;
            };
            if let Err(error) = showcase.apply(action) {
                web_sys::console::warn_1(&error.to_string().into());
            }
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Indie Sync Blueprint")
            .title_style(
                Style::default()
                    .fg(Color::Rgb(116, 86, 241))
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        f.render_widget(block, area);

        match &*state.borrow() {
            LoadState::Loading => dashboard::render_loading(f, inner),
            LoadState::Ready(showcase) => dashboard::render_showcase(showcase, f, inner),
            LoadState::Failed(error) => dashboard::render_error(&ErrorPanel::from(error), f, inner),
        }
    });

    Ok(())
}

async fn fetch_catalog(store: Rc<RefCell<LoadState>>) {
    let next = match Showcase::boot(request_catalog().await, Theme::Dark) {
        Ok(showcase) => LoadState::Ready(Box::new(showcase)),
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to initialize app: {error}").into());
            LoadState::Failed(error)
        }
    };

    *store.borrow_mut() = next;
}

async fn request_catalog() -> Result<Catalog, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(DEFAULT_DATA_PATH, &opts).map_err(fetch_error)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_error)?;
    let response = response_value.dyn_into::<Response>().map_err(fetch_error)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let json = JsFuture::from(response.json().map_err(parse_error)?)
        .await
        .map_err(parse_error)?;

    serde_wasm_bindgen::from_value::<Catalog>(json)
        .map_err(|error| LoadError::Parse(error.to_string()))
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

#[allow(clippy::needless_pass_by_value)]
fn fetch_error(value: JsValue) -> LoadError {
    LoadError::Fetch(describe(&value))
}

#[allow(clippy::needless_pass_by_value)]
fn parse_error(value: JsValue) -> LoadError {
    LoadError::Parse(describe(&value))
}
