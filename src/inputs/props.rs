use serde::Serialize;
use std::collections::BTreeMap;

use super::value::InputValue;

/// A 2D position with named axes, as point widgets bind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2d {
    pub x: f32,
    pub y: f32,
}

/// Props for a float slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatProps {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    #[serde(rename = "_default")]
    pub default: f32,
}

/// Props for an int slider, or a dropdown when `labels` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntProps {
    pub value: i32,
    pub min: i32,
    pub max: i32,
    #[serde(rename = "_default")]
    pub default: i32,
    pub labels: Vec<(String, i32)>,
}

/// Props for a 2D point control.
///
/// Only `value` is reshaped to named axes; `min`, `max`, and `default` stay
/// in the runtime's pair form, which is what the bounds math consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointProps {
    pub value: Point2d,
    pub min: [f32; 2],
    pub max: [f32; 2],
    #[serde(rename = "_default")]
    pub default: [f32; 2],
}

/// Props for a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoolProps {
    pub value: bool,
    #[serde(rename = "_default")]
    pub default: bool,
}

/// Props for an RGBA color picker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorProps {
    pub value: [f32; 4],
    #[serde(rename = "_default")]
    pub default: [f32; 4],
}

/// Props for an image slot preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageProps {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Props for a raw byte buffer indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BytesProps {
    pub bytes: Vec<u8>,
}

/// Display-ready props for one input's control widget.
///
/// Serialization is untagged: the consumer is already keyed by the input's
/// kind, so the props carry no discriminator of their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputProps {
    Float(FloatProps),
    Int(IntProps),
    Point(PointProps),
    Bool(BoolProps),
    Color(ColorProps),
    Image(ImageProps),
    Bytes(BytesProps),
}

/// Adapt one introspected input into props for its display widget.
///
/// Editable inputs get their `current` renamed to `value` and `default` to
/// `_default`; everything else passes through unchanged. Returns `None` for
/// kinds without a widget, which callers simply do not render.
pub fn display_props(input: &InputValue) -> Option<InputProps> {
    let props = match input {
        InputValue::Float {
            current,
            min,
            max,
            default,
        } => InputProps::Float(FloatProps {
            value: *current,
            min: *min,
            max: *max,
            default: *default,
        }),
        InputValue::Int {
            current,
            min,
            max,
            default,
            labels,
        } => InputProps::Int(IntProps {
            value: *current,
            min: *min,
            max: *max,
            default: *default,
            labels: labels.clone().unwrap_or_default(),
        }),
        InputValue::Point {
            current,
            min,
            max,
            default,
        } => InputProps::Point(PointProps {
            value: Point2d {
                x: current[0],
                y: current[1],
            },
            min: *min,
            max: *max,
            default: *default,
        }),
        InputValue::Bool { current, default } => InputProps::Bool(BoolProps {
            value: *current,
            default: *default,
        }),
        InputValue::Color { current, default } => InputProps::Color(ColorProps {
            value: *current,
            default: *default,
        }),
        InputValue::Image {
            status,
            width,
            height,
        } => InputProps::Image(ImageProps {
            status: status.clone(),
            width: *width,
            height: *height,
        }),
        InputValue::RawBytes { bytes } => InputProps::Bytes(BytesProps {
            bytes: bytes.clone(),
        }),
        InputValue::Unsupported => return None,
    };
    Some(props)
}

/// Adapt a whole named input set for the control panel, dropping inputs that
/// have no widget.
pub fn panel_props(inputs: &BTreeMap<String, InputValue>) -> BTreeMap<String, InputProps> {
    let mut panel = BTreeMap::new();
    for (name, input) in inputs {
        match display_props(input) {
            Some(props) => {
                panel.insert(name.clone(), props);
            }
            None => log::warn!("Input '{}' has no display mapping, skipping", name),
        }
    }
    panel
}
