use crate::Vec2;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: Mul<Output = T> + Copy> Rect<T> {
    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }
}

impl<T: Add<Output = T> + Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn intersects(&self, other: Rect<T>) -> bool {
        let self_max = self.max();
        let other_max = other.max();
        self.origin.x < other_max.x
            && other.origin.x < self_max.x
            && self.origin.y < other_max.y
            && other.origin.y < self_max.y
    }

    pub fn intersection(&self, other: Rect<T>) -> Option<Rect<T>> {
        if !self.intersects(other) {
            return None;
        }
        let larger = |a: T, b: T| if a > b { a } else { b };
        let smaller = |a: T, b: T| if a < b { a } else { b };
        let self_max = self.max();
        let other_max = other.max();
        let min = Vec2::new(
            larger(self.origin.x, other.origin.x),
            larger(self.origin.y, other.origin.y),
        );
        let max = Vec2::new(
            smaller(self_max.x, other_max.x),
            smaller(self_max.y, other_max.y),
        );
        Some(Rect::new(min, max - min))
    }
}

impl Rect<f32> {
    /// Build a rect from its center point and size.
    pub fn from_center(center: Vec2<f32>, size: Vec2<f32>) -> Self {
        Self::new(center - size / 2.0, size)
    }

    pub fn center(&self) -> Vec2<f32> {
        self.origin + self.size / 2.0
    }

    /// Intersection over union, 0.0 for disjoint or degenerate rects.
    pub fn iou(&self, other: Rect<f32>) -> f32 {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0 {
            return 0.0;
        }
        let intersection = self.intersection(other).map(|r| r.area()).unwrap_or(0.0);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            return 0.0;
        }
        intersection / union
    }
}
