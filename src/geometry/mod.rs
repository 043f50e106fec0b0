//! Circle geometry
//!
//! This module handles:
//! - The `Circle` value and its derived measurements
//! - Random circle generation within a radius range

pub mod generate;

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// A circle described by its radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    /// Create a new circle
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Area of the circle (π·r²)
    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    /// Circumference of the circle (2π·r)
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Radius together with the derived measurements
    pub fn record(&self) -> CircleRecord {
        CircleRecord {
            radius: self.radius,
            area: self.area(),
            circumference: self.circumference(),
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(radius={:.2})", self.radius)
    }
}

/// Serializable view of a circle with its derived measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleRecord {
    pub radius: f64,
    pub area: f64,
    pub circumference: f64,
}
