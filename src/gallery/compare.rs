use crate::config::InteractionConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    pub fn clamp(&self, position: f64) -> f64 {
        position.max(self.min).min(self.max)
    }
}

impl From<&InteractionConfig> for SliderBounds {
    fn from(config: &InteractionConfig) -> Self {
        Self {
            min: config.slider_min,
            max: config.slider_max,
            step: config.slider_step,
        }
    }
}

/// Percentage position of `client_x` inside a container, clamped to bounds.
/// A container with no width cannot be measured, so `None` is returned.
pub fn position_from_pointer(client_x: f64, left: f64, width: f64, bounds: &SliderBounds) -> Option<f64> {
    if width <= 0.0 || !width.is_finite() || !client_x.is_finite() {
        return None;
    }
    Some(bounds.clamp((client_x - left) / width * 100.0))
}

/// Reveal boundary between a "before" and an "after" image.
///
/// The position is a percentage that never leaves `[bounds.min, bounds.max]`.
/// Only one drag session exists at a time; a second `begin_drag` is refused
/// until `end_drag`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompareSlider {
    position: f64,
    dragging: bool,
    bounds: SliderBounds,
}

impl CompareSlider {
    pub fn new(initial: f64, bounds: SliderBounds) -> Self {
        Self {
            position: bounds.clamp(initial),
            dragging: false,
            bounds,
        }
    }

    pub fn from_config(config: &InteractionConfig) -> Self {
        Self::new(config.slider_initial, SliderBounds::from(config))
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_position_from_pointer(&mut self, client_x: f64, left: f64, width: f64) -> f64 {
        if let Some(position) = position_from_pointer(client_x, left, width, &self.bounds) {
            self.position = position;
        }
        self.position
    }

    pub fn begin_drag(&mut self) -> bool {
        if self.dragging {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Tracks the pointer while a drag is active; ignored otherwise.
    pub fn drag_to(&mut self, client_x: f64, left: f64, width: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        Some(self.set_position_from_pointer(client_x, left, width))
    }

    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Jumps straight to a click on the track.
    pub fn click_track(&mut self, client_x: f64, left: f64, width: f64) -> f64 {
        self.set_position_from_pointer(client_x, left, width)
    }

    pub fn step_left(&mut self) -> f64 {
        self.position = self.bounds.clamp(self.position - self.bounds.step);
        self.position
    }

    pub fn step_right(&mut self) -> f64 {
        self.position = self.bounds.clamp(self.position + self.bounds.step);
        self.position
    }

    /// Handles ArrowLeft / ArrowRight. Returns `None` for any other key so the
    /// caller leaves the event alone.
    pub fn handle_key(&mut self, key: &str) -> Option<f64> {
        match key {
            "ArrowLeft" => Some(self.step_left()),
            "ArrowRight" => Some(self.step_right()),
            _ => None,
        }
    }

    pub fn aria_value_now(&self) -> i64 {
        self.position.round() as i64
    }

    pub fn handle_left_style(&self) -> String {
        format!("left: {}%;", self.position)
    }

    /// Clip for the "after" image: everything right of the boundary is hidden.
    pub fn after_clip_style(&self) -> String {
        format!("clip-path: inset(0 {}% 0 0);", 100.0 - self.position)
    }
}

impl Default for CompareSlider {
    fn default() -> Self {
        Self::from_config(&InteractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_centered() {
        let slider = CompareSlider::default();
        assert_eq!(slider.position(), 50.0);
        assert_eq!(slider.aria_value_now(), 50);
    }

    #[test]
    fn test_pointer_maps_to_percentage() {
        let mut slider = CompareSlider::default();
        assert_eq!(slider.set_position_from_pointer(175.0, 100.0, 300.0), 25.0);
    }

    #[test]
    fn test_pointer_far_outside_is_clamped() {
        let mut slider = CompareSlider::default();
        assert_eq!(slider.set_position_from_pointer(-10000.0, 0.0, 400.0), 5.0);
        assert_eq!(slider.set_position_from_pointer(10000.0, 0.0, 400.0), 95.0);
    }

    #[test]
    fn test_pointer_always_within_bounds() {
        let mut slider = CompareSlider::default();
        let mut x = -2000.0;
        while x <= 2000.0 {
            let position = slider.set_position_from_pointer(x, 37.0, 611.0);
            assert!((5.0..=95.0).contains(&position), "x = {} gave {}", x, position);
            x += 13.7;
        }
    }

    #[test]
    fn test_zero_width_keeps_position() {
        let mut slider = CompareSlider::default();
        assert_eq!(slider.set_position_from_pointer(80.0, 0.0, 0.0), 50.0);
    }

    #[test]
    fn test_arrow_right_steps_by_five() {
        let mut slider = CompareSlider::default();
        assert_eq!(slider.handle_key("ArrowRight"), Some(55.0));
    }

    #[test]
    fn test_arrow_keys_clamp() {
        let mut slider = CompareSlider::default();
        for _ in 0..8 {
            slider.handle_key("ArrowRight");
        }
        assert_eq!(slider.position(), 90.0);
        slider.handle_key("ArrowRight");
        slider.handle_key("ArrowRight");
        assert_eq!(slider.position(), 95.0);

        for _ in 0..30 {
            slider.handle_key("ArrowLeft");
        }
        assert_eq!(slider.position(), 5.0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut slider = CompareSlider::default();
        assert_eq!(slider.handle_key("ArrowUp"), None);
        assert_eq!(slider.position(), 50.0);
    }

    #[test]
    fn test_single_drag_session() {
        let mut slider = CompareSlider::default();
        assert_eq!(slider.drag_to(10.0, 0.0, 100.0), None);

        assert!(slider.begin_drag());
        assert!(!slider.begin_drag());
        assert_eq!(slider.drag_to(30.0, 0.0, 100.0), Some(30.0));
        assert!(slider.end_drag());
        assert!(!slider.end_drag());
        assert_eq!(slider.drag_to(70.0, 0.0, 100.0), None);
        assert_eq!(slider.position(), 30.0);
    }

    #[test]
    fn test_click_track_jumps() {
        let mut slider = CompareSlider::default();
        assert_eq!(slider.click_track(80.0, 0.0, 100.0), 80.0);
    }

    #[test]
    fn test_styles() {
        let mut slider = CompareSlider::default();
        slider.click_track(30.0, 0.0, 100.0);
        assert_eq!(slider.handle_left_style(), "left: 30%;");
        assert_eq!(slider.after_clip_style(), "clip-path: inset(0 70% 0 0);");
    }

    #[test]
    fn test_aria_value_rounds() {
        let mut slider = CompareSlider::default();
        slider.click_track(33.6, 0.0, 100.0);
        assert_eq!(slider.aria_value_now(), 34);
    }
}
