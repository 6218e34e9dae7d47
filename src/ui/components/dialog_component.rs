//! Modal dialogs: the help screen and the diagnostic log viewer.
//!
//! Request failures are never shown as error dialogs; the Logs dialog is the
//! only place they can be read.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_TEXT: &str = r"
BARBOARD - Bar Events Terminal Client
=====================================

EVENT LIST
----------
j/k ↑↓      Move between events
e / Enter   Edit selected event
d           Delete selected event
a           Add a new event
s           Open event statistics
r           Reload events

EVENT FORM
----------
Tab/↓       Next field
Shift-Tab/↑ Previous field
←/→ Space   Change bar or category
Enter       Create or update the event
Esc         Back to the event list

STATISTICS
----------
Tab         Next filter
←/→ Space   Change category or bar
Enter / F5  Fetch statistics
Esc         Back to the event list

GENERAL
-------
? / F1      Help
G / F2      Logs (request failures are reported here)
q / Ctrl+C  Quit
";

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn render_scrollable(&mut self, f: &mut Frame, area: Rect, title: &str, content: String) {
        let dialog_area = LayoutManager::centered_rect(90, 90, area);
        f.render_widget(Clear, dialog_area);

        let lines: Vec<&str> = content.lines().collect();
        let total_lines = lines.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total_lines.saturating_sub(visible_height);
        // Keep the stored offset in range so scrolling back up responds immediately
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.scroll_offset);

        let visible_text = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<&str>>()
            .join("\n");

        let paragraph = Paragraph::new(visible_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(paragraph, dialog_area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray))
                .thumb_style(Style::default().fg(Color::White));

            f.render_stateful_widget(scrollbar, dialog_area, &mut self.scrollbar_state);
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };

        match (dialog_type, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => Action::HideDialog,
            (DialogType::Help, KeyCode::Char('?') | KeyCode::F(1)) => Action::HideDialog,
            (DialogType::Logs, KeyCode::Char('G') | KeyCode::F(2)) => Action::HideDialog,
            (_, KeyCode::Up | KeyCode::Char('k')) => {
                self.scroll_by(-1);
                Action::None
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => {
                self.scroll_by(1);
                Action::None
            }
            (_, KeyCode::PageUp) => {
                self.scroll_by(-10);
                Action::None
            }
            (_, KeyCode::PageDown) => {
                self.scroll_by(10);
                Action::None
            }
            (_, KeyCode::Home) => {
                self.scroll_offset = 0;
                Action::None
            }
            (_, KeyCode::End) => {
                // Clamped to the content on the next render
                self.scroll_offset = usize::MAX;
                Action::None
            }
            (DialogType::Logs, KeyCode::Char('c')) => {
                self.logger.clear();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => self.render_scrollable(f, rect, DIALOG_TITLE_HELP, HELP_TEXT.to_string()),
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                let content = if logs.is_empty() {
                    "No logs available".to_string()
                } else {
                    logs.join("\n")
                };
                self.render_scrollable(f, rect, DIALOG_TITLE_LOGS, content);
            }
            None => {}
        }
    }
}
