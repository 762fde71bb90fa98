use crate::error::ShowcaseError;
use crate::showcase::Showcase;

/// User intents produced by the frontends' input layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextCategory,
    PreviousCategory,
    /// 0-based tab position.
    SelectCategory(usize),
    NextBrand,
    PreviousBrand,
    ToggleDescription,
    ToggleTheme,
    OpenSheet,
    CloseSheet,
    SearchInput(char),
    SearchBackspace,
    CompactUp,
    CompactDown,
    CompactSelect,
}

impl Showcase {
    pub fn apply(&mut self, action: Action) -> Result<(), ShowcaseError> {
        match action {
            Action::NextCategory => self.next_category(),
            Action::PreviousCategory => self.previous_category(),
            Action::SelectCategory(position) => self.select_category_at(position)?,
            Action::NextBrand => self.next_brand(),
            Action::PreviousBrand => self.previous_brand(),
            Action::ToggleDescription => self.toggle_description(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::OpenSheet => self.open_sheet(),
            Action::CloseSheet => self.close_sheet(),
            Action::SearchInput(c) => self.push_search_char(c),
            Action::SearchBackspace => self.pop_search_char(),
            Action::CompactUp => self.compact_cursor_up(),
            Action::CompactDown => self.compact_cursor_down(),
            Action::CompactSelect => self.select_compact_cursor()?,
        }
        Ok(())
    }
}
