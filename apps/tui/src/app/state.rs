use indie_sync::{Catalog, ErrorPanel, LoadError, Showcase, Theme};

#[derive(Debug)]
pub enum Screen {
    Showcase(Box<Showcase>),
    Error(ErrorPanel),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub status_message: String,
}

impl App {
    /// Builds the app from the startup load. A failed load or an unusable
    /// catalog lands on the error screen.
    pub fn from_load(loaded: Result<Catalog, LoadError>, theme: Theme) -> Self {
        match Showcase::boot(loaded, theme) {
            Ok(showcase) => Self::with_showcase(showcase),
            Err(error) => Self::with_error(&error),
        }
    }

    pub fn with_showcase(showcase: Showcase) -> Self {
        let status_message = showcase
            .active_category()
            .map(|category| format!("Showing {}", category.label))
            .unwrap_or_default();
        Self {
            running: true,
            screen: Screen::Showcase(Box::new(showcase)),
            status_message,
        }
    }

    pub fn with_error(error: &LoadError) -> Self {
        log::error!("{error}");
        Self {
            running: true,
            screen: Screen::Error(ErrorPanel::from(error)),
            status_message: String::new(),
        }
    }

    #[cfg(test)]
    pub fn showcase(&self) -> Option<&Showcase> {
        match &self.screen {
            Screen::Showcase(showcase) => Some(showcase),
            Screen::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_shows_error_screen() {
        let app = App::from_load(Err(LoadError::Status(404)), Theme::Dark);

        let Screen::Error(panel) = &app.screen else {
            panic!("expected error screen");
        };
        assert_eq!(panel.detail, "Failed to load data: 404");
        assert!(app.showcase().is_none());
    }

    #[test]
    fn empty_catalog_is_unusable() {
        let app = App::from_load(Ok(Catalog::from_categories(Vec::new())), Theme::Dark);
        assert!(matches!(app.screen, Screen::Error(_)));
    }
}
