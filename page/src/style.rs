use std::{fmt, time::Duration};

use itertools::Itertools;

use stopgap_geometry::{Color, Vector};

/// The inline style of an element.
///
/// Only the properties the fallback surface can produce exist here. Every
/// property is independently optional; assigning a declaration replaces the
/// addressed property and leaves the others alone. In particular a new
/// `transform` list replaces the previous one wholesale, it is not merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub transform: Option<Vec<TransformOp>>,
    pub opacity: Option<f64>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub background_color: Option<Color>,
    pub color: Option<Color>,
    pub transition: Option<Transition>,
    pub cursor: Option<Cursor>,
}

impl Style {
    pub fn apply(&mut self, declaration: StyleDeclaration) {
        use StyleDeclaration::*;
        match declaration {
            Transform(ops) => self.transform = Some(ops),
            Opacity(value) => self.opacity = Some(value),
            Width(length) => self.width = Some(length),
            Height(length) => self.height = Some(length),
            BackgroundColor(color) => self.background_color = Some(color),
            ForegroundColor(color) => self.color = Some(color),
            Transition(transition) => self.transition = Some(transition),
            Cursor(cursor) => self.cursor = Some(cursor),
        }
    }

    pub fn assign(&mut self, declarations: impl IntoIterator<Item = StyleDeclaration>) {
        for declaration in declarations {
            self.apply(declaration);
        }
    }

    /// The accumulated horizontal / vertical translation of the transform.
    pub fn translation(&self) -> Vector {
        let mut translation = Vector::ZERO;
        for op in self.transform.iter().flatten() {
            match op {
                TransformOp::TranslateX(x) => translation.x += x,
                TransformOp::TranslateY(y) => translation.y += y,
                TransformOp::Translate(v) => translation += *v,
                _ => {}
            }
        }
        translation
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut declarations = Vec::new();
        if let Some(ops) = &self.transform {
            declarations.push(format!("transform: {}", ops.iter().join(" ")));
        }
        if let Some(opacity) = self.opacity {
            declarations.push(format!("opacity: {opacity}"));
        }
        if let Some(width) = &self.width {
            declarations.push(format!("width: {width}"));
        }
        if let Some(height) = &self.height {
            declarations.push(format!("height: {height}"));
        }
        if let Some(color) = &self.background_color {
            declarations.push(format!("background-color: {color}"));
        }
        if let Some(color) = &self.color {
            declarations.push(format!("color: {color}"));
        }
        if let Some(transition) = &self.transition {
            declarations.push(format!("transition: {transition}"));
        }
        if let Some(cursor) = &self.cursor {
            declarations.push(format!("cursor: {cursor}"));
        }
        write!(f, "{}", declarations.iter().join("; "))
    }
}

/// A single property assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleDeclaration {
    Transform(Vec<TransformOp>),
    Opacity(f64),
    Width(Length),
    Height(Length),
    BackgroundColor(Color),
    /// The `color` property.
    ForegroundColor(Color),
    Transition(Transition),
    Cursor(Cursor),
}

/// One operation of a `transform` list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    TranslateX(f64),
    TranslateY(f64),
    Translate(Vector),
    Scale(f64),
    /// Degrees, positive clockwise.
    Rotate(f64),
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::TranslateX(x) => write!(f, "translateX({x}px)"),
            TransformOp::TranslateY(y) => write!(f, "translateY({y}px)"),
            TransformOp::Translate(v) => write!(f, "translate({}px, {}px)", v.x, v.y),
            TransformOp::Scale(factor) => write!(f, "scale({factor})"),
            TransformOp::Rotate(degrees) => write!(f, "rotate({degrees}deg)"),
        }
    }
}

/// A width or height value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Parses `120px`, `50%`, and bare numbers (treated as pixels).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(value) = text.strip_suffix("px") {
            return value.trim().parse().ok().map(Length::Px);
        }
        if let Some(value) = text.strip_suffix('%') {
            return value.trim().parse().ok().map(Length::Percent);
        }
        text.parse().ok().map(Length::Px)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(value) => write!(f, "{value}px"),
            Length::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::Px(value)
    }
}

/// A transition covering all animatable properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub timing: Timing,
}

impl Transition {
    pub fn all(duration: Duration) -> Self {
        Self {
            duration,
            timing: Timing::default(),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all {}ms {}", self.duration.as_millis(), self.timing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timing {
    #[default]
    Ease,
    Linear,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timing::Ease => write!(f, "ease"),
            Timing::Linear => write!(f, "linear"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
    Grabbing,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Default => write!(f, "default"),
            Cursor::Grab => write!(f, "grab"),
            Cursor::Grabbing => write!(f, "grabbing"),
        }
    }
}
