//! Random geometric shape generation
//!
//! Every random draw comes from the `Rng` passed in by the caller, so a seeded
//! generator reproduces the same batch of shapes.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const COLORS: [&str; 5] = ["Red", "Green", "Blue", "Yellow", "Orange"];

/// Exclusive upper bound for center coordinates
pub const CANVAS_SIZE: i32 = 100;

/// Dimensions are drawn from `1..MAX_DIMENSION`
pub const MAX_DIMENSION: u32 = 20;

/// Largest number of shapes, all kinds together, generated by one request
pub const MAX_SHAPES: i64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Circle => write!(f, "Circle"),
            ShapeKind::Square => write!(f, "Square"),
            ShapeKind::Triangle => write!(f, "Triangle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("At least one shape must be requested")]
    NothingRequested,

    #[error("The number of {0}s must be a positive whole number")]
    NegativeCount(ShapeKind),

    #[error("The {0} dimensions must be greater than 0")]
    NonPositiveDimension(ShapeKind),

    #[error("At most 1000 shapes can be requested at once")]
    TooManyShapes,
}

impl ShapeError {
    pub fn code(&self) -> &'static str {
        match self {
            ShapeError::NothingRequested => "nothing_requested",
            ShapeError::NegativeCount(_) => "negative_count",
            ShapeError::NonPositiveDimension(_) => "non_positive_dimension",
            ShapeError::TooManyShapes => "too_many_shapes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Circle {
        radius: f64,
    },
    Square {
        side: f64,
    },
    Triangle {
        base: f64,
        height: f64,
        /// Horizontal distance from vertex A to the apex foot
        offset: f64,
        angle_a: f64,
        angle_b: f64,
        angle_c: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(flatten)]
    pub geometry: Geometry,
    pub color: String,
    pub center: Point,
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    COLORS.choose(rng).unwrap_or(&COLORS[0]).to_string()
}

fn random_center<R: Rng + ?Sized>(rng: &mut R) -> Point {
    Point {
        x: rng.gen_range(0..CANVAS_SIZE),
        y: rng.gen_range(0..CANVAS_SIZE),
    }
}

impl Shape {
    pub fn circle<R: Rng + ?Sized>(radius: f64, rng: &mut R) -> Result<Self, ShapeError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(ShapeError::NonPositiveDimension(ShapeKind::Circle));
        }
        Ok(Shape {
            geometry: Geometry::Circle { radius },
            color: random_color(rng),
            center: random_center(rng),
        })
    }

    pub fn square<R: Rng + ?Sized>(side: f64, rng: &mut R) -> Result<Self, ShapeError> {
        if side.is_nan() || side <= 0.0 {
            return Err(ShapeError::NonPositiveDimension(ShapeKind::Square));
        }
        Ok(Shape {
            geometry: Geometry::Square { side },
            color: random_color(rng),
            center: random_center(rng),
        })
    }

    /// The apex sits above a point drawn from the middle 80% of the base.
    pub fn triangle<R: Rng + ?Sized>(
        base: f64,
        height: f64,
        rng: &mut R,
    ) -> Result<Self, ShapeError> {
        if base.is_nan() || height.is_nan() || base <= 0.0 || height <= 0.0 {
            return Err(ShapeError::NonPositiveDimension(ShapeKind::Triangle));
        }

        let margin = base * 0.1;
        let offset = rng.gen::<f64>() * (base - 2.0 * margin) + margin;

        let side_ac = offset.hypot(height);
        let side_bc = (base - offset).hypot(height);
        let side_ab = base;

        let angle_a = ((side_ac.powi(2) + side_ab.powi(2) - side_bc.powi(2))
            / (2.0 * side_ac * side_ab))
            .acos()
            .to_degrees();
        let angle_b = ((side_bc.powi(2) + side_ab.powi(2) - side_ac.powi(2))
            / (2.0 * side_bc * side_ab))
            .acos()
            .to_degrees();
        let angle_c = 180.0 - angle_a - angle_b;

        Ok(Shape {
            geometry: Geometry::Triangle {
                base,
                height,
                offset,
                angle_a,
                angle_b,
                angle_c,
            },
            color: random_color(rng),
            center: random_center(rng),
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Square { .. } => ShapeKind::Square,
            Geometry::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    pub fn area(&self) -> f64 {
        match self.geometry {
            Geometry::Circle { radius } => PI * radius * radius,
            Geometry::Square { side } => side * side,
            Geometry::Triangle { base, height, .. } => 0.5 * base * height,
        }
    }

    pub fn properties(&self) -> String {
        let Point { x, y } = self.center;
        match self.geometry {
            Geometry::Circle { radius } => {
                format!("Radius: {radius}, Color: {}, Center: ({x}, {y})", self.color)
            }
            Geometry::Square { side } => {
                format!("Side: {side}, Color: {}, Center: ({x}, {y})", self.color)
            }
            Geometry::Triangle {
                base,
                height,
                offset,
                angle_a,
                angle_b,
                angle_c,
            } => format!(
                "Base: {base} units, Height: {height} units, Offset: {offset:.2} units, \
                 Angles: A = {angle_a:.2}°, B = {angle_b:.2}°, C = {angle_c:.2}°, \
                 Color: {}, Center: ({x}, {y})",
                self.color
            ),
        }
    }
}

/// How many shapes of each kind to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRequest {
    #[serde(default)]
    pub circles: i32,
    #[serde(default)]
    pub squares: i32,
    #[serde(default)]
    pub triangles: i32,
}

impl ShapeRequest {
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.circles <= 0 && self.squares <= 0 && self.triangles <= 0 {
            return Err(ShapeError::NothingRequested);
        }
        if self.circles < 0 {
            return Err(ShapeError::NegativeCount(ShapeKind::Circle));
        }
        if self.squares < 0 {
            return Err(ShapeError::NegativeCount(ShapeKind::Square));
        }
        if self.triangles < 0 {
            return Err(ShapeError::NegativeCount(ShapeKind::Triangle));
        }
        if self.total() > MAX_SHAPES {
            return Err(ShapeError::TooManyShapes);
        }
        Ok(())
    }

    /// Sum of the three counts, widened so it cannot overflow
    pub fn total(&self) -> i64 {
        i64::from(self.circles) + i64::from(self.squares) + i64::from(self.triangles)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSummary {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub color: String,
    pub center: Point,
    pub area: f64,
    pub properties: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedShapes {
    pub circles: Vec<Shape>,
    pub squares: Vec<Shape>,
    pub triangles: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapesOutput {
    pub shapes: Vec<ShapeSummary>,
    pub grouped: GroupedShapes,
}

fn random_dimension<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(1..MAX_DIMENSION))
}

/// Generate circles, then squares, then triangles.
pub fn generate<R: Rng + ?Sized>(
    request: &ShapeRequest,
    rng: &mut R,
) -> Result<ShapesOutput, ShapeError> {
    request.validate()?;

    let mut circles = Vec::new();
    for _ in 0..request.circles {
        let radius = random_dimension(rng);
        circles.push(Shape::circle(radius, rng)?);
    }

    let mut squares = Vec::new();
    for _ in 0..request.squares {
        let side = random_dimension(rng);
        squares.push(Shape::square(side, rng)?);
    }

    let mut triangles = Vec::new();
    for _ in 0..request.triangles {
        let base = random_dimension(rng);
        let height = random_dimension(rng);
        triangles.push(Shape::triangle(base, height, rng)?);
    }

    let shapes = circles
        .iter()
        .chain(&squares)
        .chain(&triangles)
        .map(|shape| ShapeSummary {
            kind: shape.kind(),
            color: shape.color.clone(),
            center: shape.center,
            area: shape.area(),
            properties: shape.properties(),
        })
        .collect();

    Ok(ShapesOutput {
        shapes,
        grouped: GroupedShapes {
            circles,
            squares,
            triangles,
        },
    })
}
