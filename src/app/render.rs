use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{App, Focus};
use crate::widgets::popup;

// Suggestion menu display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MIN_POPUP_WIDTH: usize = 20;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

const PLACEHOLDER: &str = "Search...";
const LOADING_TEXT: &str = "Loading...";
const EMPTY_MENU_TEXT: &str = "No suggestions";
const NO_VALUES_TEXT: &str = "No values added.";
const KEY_HINTS: &str = "Tab: switch focus  Ctrl+U: clear  Ctrl+C: quit";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Input field
            Constraint::Min(3),    // Committed values
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        let input_area = layout[0];
        let values_area = layout[1];
        let status_area = layout[2];

        self.render_values_pane(frame, values_area);
        self.render_status_line(frame, status_area);
        self.render_input_field(frame, input_area);

        // Menu last so it draws over the value list
        if self.focus == Focus::Input && self.typeahead.is_menu_open() {
            self.render_menu(frame, input_area);
        }
    }

    fn render_input_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Input;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Add value ")
            .border_style(Style::default().fg(border_color));

        let text = self.typeahead.text();
        let content = if text.is_empty() && !focused {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(text).style(Style::default().fg(Color::White))
        };

        frame.render_widget(content.block(block), area);

        if focused {
            let cursor_x = area.x + 1 + text.width() as u16;
            frame.set_cursor_position(Position::new(
                cursor_x.min(area.right().saturating_sub(2)),
                area.y + 1,
            ));
        }
    }

    /// Render the suggestion menu under the input field
    fn render_menu(&self, frame: &mut Frame, input_area: Rect) {
        let options = self.typeahead.options();

        let items: Vec<ListItem> = if self.typeahead.is_loading() {
            vec![placeholder_item(LOADING_TEXT)]
        } else if options.is_empty() {
            vec![placeholder_item(EMPTY_MENU_TEXT)]
        } else {
            let highlighted = self.typeahead.highlighted();
            let first_visible = highlighted
                .map(|h| h.saturating_sub(MAX_VISIBLE_SUGGESTIONS - 1))
                .unwrap_or(0);

            options
                .iter()
                .enumerate()
                .skip(first_visible)
                .take(MAX_VISIBLE_SUGGESTIONS)
                .map(|(i, option)| {
                    let line = if Some(i) == highlighted {
                        // Highlight selected item with high contrast colors
                        Line::from(Span::styled(
                            format!("► {}", option.label),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(Span::styled(
                            format!("  {}", option.label),
                            Style::default().fg(Color::White).bg(Color::Black),
                        ))
                    };
                    ListItem::new(line)
                })
                .collect()
        };

        let text_width = options
            .iter()
            .map(|o| o.label.width())
            .chain([LOADING_TEXT.width(), EMPTY_MENU_TEXT.width()])
            .max()
            .unwrap_or(0)
            .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
        let popup_width = (text_width as u16) + POPUP_PADDING;
        let popup_height = (items.len() as u16) + POPUP_BORDER_HEIGHT;

        let popup_area = popup::popup_near_anchor(
            input_area,
            frame.area(),
            popup_width,
            popup_height,
            POPUP_OFFSET_X,
        );

        // Clear the background area to prevent transparency
        popup::clear_area(frame, popup_area);

        let border_color = if self.typeahead.is_menu_focused() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Suggestions ")
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(list, popup_area);
    }

    fn render_values_pane(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Values;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Values ({}) ", self.values.len()))
            .border_style(Style::default().fg(border_color));

        if self.values.is_empty() {
            let content = Paragraph::new(NO_VALUES_TEXT)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(content, area);
            return;
        }

        let items: Vec<ListItem> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if focused && i == self.selected_value {
                    ListItem::new(format!("► {}", value)).style(
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(format!("  {}", value))
                }
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let (text, color) = match &self.status {
            Some(status) => (status.as_str(), Color::Yellow),
            None => (KEY_HINTS, Color::DarkGray),
        };
        frame.render_widget(Paragraph::new(text).style(Style::default().fg(color)), area);
    }
}

fn placeholder_item(text: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        format!("  {}", text),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
