use serde::{Deserialize, Serialize};

/// Layout box of an element as reported by the page (`getBoundingClientRect`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// A rect is usable for geometry only when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid() {
        let rect = Rect::new(10.0, 20.0, 100.0, 30.0);
        assert_eq!(rect.center_x(), 70.0);
        assert_eq!(rect.center_y(), 25.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, f64::INFINITY, 1.0, 1.0).is_finite());
    }
}
