// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Class highlighted in the left panel, if any
    pub selected_class: Option<String>,

    /// Show notes inline on the cards instead of behind the hover tooltip
    pub show_notes: bool,

    pub window_w: u32,
    pub window_h: u32,

    /// Course id text field contents (parsed on fetch)
    pub course_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_class: None,
            show_notes: false,
            window_w: 1100,
            window_h: 700,
            course_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
