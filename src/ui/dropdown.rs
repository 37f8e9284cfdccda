use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 30.0;

/// Dropdown menu listing named choices.
///
/// Picking an item reports it every time, even when it is already selected,
/// so the same preset can be stamped twice in a row.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: Option<usize>,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: None,
            is_open: false,
            label: label.into(),
        }
    }

    /// Index of the last picked item, if any
    #[cfg(test)]
    fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 18.0, BLACK);

        let header_color = if self.is_hovered_header(mouse_pos) {
            Color::from_rgba(220, 220, 220, 255)
        } else {
            Color::from_rgba(200, 200, 200, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, header_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, Color::from_rgba(100, 100, 100, 255));

        let header = self
            .selected
            .and_then(|i| self.items.get(i))
            .map_or("Choose...", String::as_str);
        draw_text(header, self.x + 5.0, self.y + 21.0, 18.0, BLACK);
        draw_text("v", self.x + self.width - 16.0, self.y + 20.0, 18.0, BLACK);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        draw_rectangle(self.x, self.y + ITEM_HEIGHT, self.width, menu_height, Color::from_rgba(240, 240, 240, 255));

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            if self.is_hovered_item(mouse_pos, i) {
                draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, Color::from_rgba(180, 200, 230, 255));
            }
            draw_text(item, self.x + 5.0, item_y + 21.0, 18.0, BLACK);
        }

        draw_rectangle_lines(self.x, self.y + ITEM_HEIGHT, self.width, menu_height, 2.0, Color::from_rgba(100, 100, 100, 255));
    }

    /// Handle clicks; returns the picked index on the frame an item is chosen
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        self.click(mouse_pos)
    }

    /// Click logic, separated from macroquad input so it can be tested
    fn click(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if self.is_hovered_header(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }
        if !self.is_open {
            return None;
        }

        self.is_open = false;
        let picked = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i));
        if picked.is_some() {
            self.selected = picked;
        }
        picked
    }

    /// True if the click landed on this widget (header or open menu)
    pub fn captures(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_header(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + ITEM_HEIGHT * (index as f32 + 1.0)
    }

    fn is_hovered_header(&self, mouse_pos: (f32, f32)) -> bool {
        in_rect(mouse_pos, self.x, self.y, self.width, ITEM_HEIGHT)
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        in_rect(mouse_pos, self.x, self.item_y(index), self.width, ITEM_HEIGHT)
    }
}

fn in_rect(pos: (f32, f32), x: f32, y: f32, w: f32, h: f32) -> bool {
    pos.0 >= x && pos.0 <= x + w && pos.1 >= y && pos.1 < y + h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> Dropdown {
        let items = ["glider", "blinker", "block"].map(String::from).to_vec();
        Dropdown::new(0.0, 100.0, 100.0, "Preset", items)
    }

    #[test]
    fn test_header_click_toggles_menu() {
        let mut dd = dropdown();
        assert_eq!(dd.click((50.0, 110.0)), None);
        assert!(dd.is_open());
        assert_eq!(dd.click((50.0, 110.0)), None);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_pick_item_reports_each_time() {
        let mut dd = dropdown();
        dd.click((50.0, 110.0));
        // Second item spans y 160..190
        assert_eq!(dd.click((50.0, 170.0)), Some(1));
        assert!(!dd.is_open());
        dd.click((50.0, 110.0));
        assert_eq!(dd.click((50.0, 170.0)), Some(1));
        assert_eq!(dd.selected(), Some(1));
    }

    #[test]
    fn test_click_outside_closes_without_pick() {
        let mut dd = dropdown();
        dd.click((50.0, 110.0));
        assert_eq!(dd.click((500.0, 500.0)), None);
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), None);
    }

    #[test]
    fn test_closed_menu_items_do_not_capture() {
        let dd = dropdown();
        assert!(dd.captures((50.0, 110.0)));
        assert!(!dd.captures((50.0, 170.0)));
    }
}
