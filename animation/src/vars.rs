use std::fmt;

use itertools::Itertools;
use log::debug;

use stopgap_geometry::Color;
use stopgap_page::{Length, StyleDeclaration, TransformOp};

pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// A property bag of animation vars.
///
/// Keys are free-form strings, because that is what the emulated surface
/// accepts. The builder methods cover the keys translation understands;
/// anything else can be inserted through [`Vars::value`] and is dropped
/// silently when the bag is translated.
#[derive(Default)]
pub struct Vars {
    values: Vec<(String, Value)>,
    duration: Option<f64>,
    delay: Option<f64>,
    pub(crate) on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for Vars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vars")
            .field("values", &self.values)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Vars {
    pub fn new() -> Self {
        Default::default()
    }

    /// Horizontal offset in pixels.
    pub fn x(self, x: f64) -> Self {
        self.value("x", x)
    }

    /// Vertical offset in pixels.
    pub fn y(self, y: f64) -> Self {
        self.value("y", y)
    }

    pub fn opacity(self, opacity: f64) -> Self {
        self.value("opacity", opacity)
    }

    pub fn scale(self, scale: f64) -> Self {
        self.value("scale", scale)
    }

    /// Rotation in degrees.
    pub fn rotation(self, degrees: f64) -> Self {
        self.value("rotation", degrees)
    }

    pub fn width(self, width: impl Into<Value>) -> Self {
        self.value("width", width)
    }

    pub fn height(self, height: impl Into<Value>) -> Self {
        self.value("height", height)
    }

    pub fn background_color(self, color: impl Into<Value>) -> Self {
        self.value("backgroundColor", color)
    }

    pub fn color(self, color: impl Into<Value>) -> Self {
        self.value("color", color)
    }

    /// Inserts an arbitrary key. A key translation does not understand
    /// contributes nothing to the output.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.values.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.values.push((key, value));
        }
        self
    }

    /// Duration of the transition in seconds. Defaults to 1.
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Delay before the transition starts, in seconds. Defaults to 0.
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = Some(seconds);
        self
    }

    /// Invoked once, after delay plus duration elapsed. This is approximated
    /// with a timer, the actual transition is not observed.
    pub fn on_complete(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub(crate) fn duration_seconds(&self) -> f64 {
        self.duration.unwrap_or(1.0)
    }

    pub(crate) fn delay_seconds(&self) -> f64 {
        self.delay.unwrap_or(0.0)
    }

    /// Translates the bag into style declarations.
    ///
    /// The offset, scale, and rotation keys compose into one transform list,
    /// evaluated in the fixed order `x`, `y`, `scale`, `rotation`. The
    /// passthrough keys map verbatim to their style properties. Translating
    /// the same bag twice produces the same declarations.
    pub fn translate(&self) -> Vec<StyleDeclaration> {
        let mut declarations = Vec::new();

        let mut transform = Vec::new();
        if let Some(x) = self.number("x") {
            transform.push(TransformOp::TranslateX(x));
        }
        if let Some(y) = self.number("y") {
            transform.push(TransformOp::TranslateY(y));
        }
        let opacity = self.number("opacity");
        if let Some(scale) = self.number("scale") {
            transform.push(TransformOp::Scale(scale));
        }
        if let Some(degrees) = self.number("rotation") {
            transform.push(TransformOp::Rotate(degrees));
        }

        if !transform.is_empty() {
            declarations.push(StyleDeclaration::Transform(transform));
        }
        if let Some(opacity) = opacity {
            declarations.push(StyleDeclaration::Opacity(opacity));
        }
        if let Some(width) = self.length("width") {
            declarations.push(StyleDeclaration::Width(width));
        }
        if let Some(height) = self.length("height") {
            declarations.push(StyleDeclaration::Height(height));
        }
        if let Some(color) = self.color_value("backgroundColor") {
            declarations.push(StyleDeclaration::BackgroundColor(color));
        }
        if let Some(color) = self.color_value("color") {
            declarations.push(StyleDeclaration::ForegroundColor(color));
        }

        let dropped = self
            .values
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(|key| !TRANSLATED_KEYS.contains(key))
            .join(", ");
        if !dropped.is_empty() {
            debug!("dropped untranslatable keys: {dropped}");
        }

        declarations
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_number()
    }

    fn length(&self, key: &str) -> Option<Length> {
        self.get(key)?.as_length()
    }

    fn color_value(&self, key: &str) -> Option<Color> {
        self.get(key)?.as_color()
    }
}

const TRANSLATED_KEYS: &[&str] = &[
    "x",
    "y",
    "opacity",
    "scale",
    "rotation",
    "width",
    "height",
    "backgroundColor",
    "color",
];

/// A value of a property bag entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Length(Length),
    Color(Color),
    Text(String),
}

impl Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    fn as_length(&self) -> Option<Length> {
        match self {
            Value::Number(value) => Some(Length::Px(*value)),
            Value::Length(length) => Some(*length),
            Value::Text(text) => Length::parse(text),
            Value::Color(_) => None,
        }
    }

    fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(color) => Some(*color),
            Value::Text(text) => Color::parse(text),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<Length> for Value {
    fn from(length: Length) -> Self {
        Value::Length(length)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use stopgap_geometry::Color;
    use stopgap_page::{Length, StyleDeclaration, TransformOp};

    use super::Vars;

    #[test]
    fn composes_one_transform_in_fixed_order() {
        // Insertion order must not matter.
        let vars = Vars::new().rotation(45.0).scale(2.0).y(20.0).x(100.0);
        assert_eq!(
            vars.translate(),
            [StyleDeclaration::Transform(vec![
                TransformOp::TranslateX(100.0),
                TransformOp::TranslateY(20.0),
                TransformOp::Scale(2.0),
                TransformOp::Rotate(45.0),
            ])]
        );
    }

    #[test]
    fn passes_direct_properties_through() {
        let vars = Vars::new()
            .opacity(0.5)
            .width(120.0)
            .height("50%")
            .background_color("#ff8000")
            .color(Color::BLACK);
        assert_eq!(
            vars.translate(),
            [
                StyleDeclaration::Opacity(0.5),
                StyleDeclaration::Width(Length::Px(120.0)),
                StyleDeclaration::Height(Length::Percent(50.0)),
                StyleDeclaration::BackgroundColor(Color::rgb_u32(0xff8000)),
                StyleDeclaration::ForegroundColor(Color::BLACK),
            ]
        );
    }

    #[test]
    fn drops_unrecognized_keys() {
        let vars = Vars::new().value("foo", 1.0).value("stagger", 0.2);
        assert!(vars.translate().is_empty());
    }

    #[test]
    fn drops_unparsable_values() {
        let vars = Vars::new().width("wide").background_color("red");
        assert!(vars.translate().is_empty());
    }

    #[test]
    fn later_insertion_replaces_the_key() {
        let vars = Vars::new().x(10.0).x(100.0);
        assert_eq!(
            vars.translate(),
            [StyleDeclaration::Transform(vec![TransformOp::TranslateX(
                100.0
            )])]
        );
    }

    #[test]
    fn empty_bag_translates_to_nothing() {
        assert!(Vars::new().translate().is_empty());
    }

    #[test]
    fn defaults() {
        let vars = Vars::new();
        assert_eq!(vars.duration_seconds(), 1.0);
        assert_eq!(vars.delay_seconds(), 0.0);

        let vars = Vars::new().duration(0.5).delay(0.2);
        assert_eq!(vars.duration_seconds(), 0.5);
        assert_eq!(vars.delay_seconds(), 0.2);
    }
}
