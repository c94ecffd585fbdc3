use macroquad::prelude::*;

/// Panel button with hover highlight
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    const COLOR: Color = Color::new(0.27, 0.27, 0.27, 1.0);
    const HOVER_COLOR: Color = Color::new(0.4, 0.4, 0.4, 1.0);

    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if the point lies on the button
    pub fn contains(&self, point: (f32, f32)) -> bool {
        self.rect.contains(vec2(point.0, point.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) {
            Self::HOVER_COLOR
        } else {
            Self::COLOR
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let button = Button::new(10.0, 10.0, 100.0, 40.0, "Reset");
        assert!(button.contains((10.0, 10.0)));
        assert!(button.contains((60.0, 30.0)));
        assert!(!button.contains((9.0, 30.0)));
        assert!(!button.contains((60.0, 51.0)));
        assert_eq!(button.label(), "Reset");
    }
}
