//! Overflow menu popup

use dashdemo_app::dashboard::MenuState;
use dashdemo_app::MenuItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::layout::top_right_rect;
use crate::theme::styles;

const MENU_WIDTH: u16 = 22;

pub struct OverflowMenu<'a> {
    menu: &'a MenuState,
}

impl<'a> OverflowMenu<'a> {
    pub fn new(menu: &'a MenuState) -> Self {
        Self { menu }
    }
}

impl Widget for OverflowMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = MenuItem::ALL.len() as u16 + 2;
        let popup = top_right_rect(MENU_WIDTH, height, area);
        Clear.render(popup, buf);

        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .map(|item| {
                let style = if *item == MenuItem::Logout {
                    styles::error()
                } else {
                    styles::text_primary()
                };
                ListItem::new(Line::styled(format!(" {}", item.label()), style))
            })
            .collect();

        let list = List::new(items)
            .block(styles::modal_block(" Menu "))
            .highlight_style(styles::focused_selected());
        let mut list_state = ListState::default().with_selected(Some(self.menu.selected));
        StatefulWidget::render(list, popup, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_menu_lists_items() {
        let menu = MenuState::default();
        let mut term = TestTerminal::new();

        term.render_widget(OverflowMenu::new(&menu), term.area());

        for label in ["Profile", "Settings", "Help & Support", "Logout"] {
            assert!(term.buffer_contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_menu_anchored_top_right() {
        let menu = MenuState::default();
        let mut term = TestTerminal::new();

        term.render_widget(OverflowMenu::new(&menu), term.area());

        assert!(term.line_contains(1, "Profile"));
        assert_eq!(term.cell_at(0, 1), Some(" "));
    }
}
