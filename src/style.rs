//! Typed inline style properties written by the page behaviors.
//!
//! Only the four properties the behaviors touch are modeled. Each is
//! optional: `None` means "not set inline", so the stylesheet value applies.

use std::fmt;
use std::time::Duration;

/// The `display` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    /// Removed from layout entirely.
    None,
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Display::Block => f.write_str("block"),
            Display::None => f.write_str("none"),
        }
    }
}

/// CSS easing keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingFunction {
    #[default]
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimingFunction::Ease => "ease",
            TimingFunction::Linear => "linear",
            TimingFunction::EaseIn => "ease-in",
            TimingFunction::EaseOut => "ease-out",
            TimingFunction::EaseInOut => "ease-in-out",
        })
    }
}

/// A single-property `transition`, e.g. `opacity 0.3s ease`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub property: String,
    pub duration: Duration,
    pub timing: TimingFunction,
}

impl Transition {
    pub fn new(property: impl Into<String>, duration: Duration, timing: TimingFunction) -> Self {
        Self {
            property: property.into(),
            duration,
            timing,
        }
    }

    /// The fade used on recipe cards: `opacity 0.3s ease`.
    pub fn opacity_fade() -> Self {
        Self::new("opacity", Duration::from_millis(300), TimingFunction::Ease)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {}",
            self.property,
            self.duration.as_secs_f32(),
            self.timing
        )
    }
}

/// A `box-shadow` with a vertical offset, blur and black at `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub offset_y: u16,
    pub blur: u16,
    pub alpha: f32,
}

impl BoxShadow {
    /// Navbar shadow near the top of the page.
    pub const SUBTLE: BoxShadow = BoxShadow {
        offset_y: 2,
        blur: 4,
        alpha: 0.05,
    };

    /// Navbar shadow once the page has scrolled past the threshold.
    pub const PRONOUNCED: BoxShadow = BoxShadow {
        offset_y: 4,
        blur: 6,
        alpha: 0.1,
    };
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0 {}px {}px rgba(0,0,0,{})",
            self.offset_y, self.blur, self.alpha
        )
    }
}

/// The inline `style` attribute of one element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineStyle {
    pub display: Option<Display>,
    /// In `[0.0, 1.0]`.
    pub opacity: Option<f32>,
    pub transition: Option<Transition>,
    pub box_shadow: Option<BoxShadow>,
}

impl InlineStyle {
    /// `display: none` is set inline.
    pub fn is_hidden(&self) -> bool {
        self.display == Some(Display::None)
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
    }

    /// Render as `style` attribute text, properties in a fixed order.
    pub fn to_css_text(&self) -> String {
        let mut decls = Vec::new();
        if let Some(display) = self.display {
            decls.push(format!("display: {display}"));
        }
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {opacity}"));
        }
        if let Some(transition) = &self.transition {
            decls.push(format!("transition: {transition}"));
        }
        if let Some(shadow) = self.box_shadow {
            decls.push(format!("box-shadow: {shadow}"));
        }
        decls.join("; ")
    }
}
