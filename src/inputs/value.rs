use serde::{Deserialize, Serialize};
use std::fmt;

/// One shader input as reported by the runtime's introspection, tagged by kind.
///
/// This mirrors the runtime's wire shape exactly: numeric inputs carry
/// `current`/`min`/`max`/`default` at their native widths, images report load
/// status plus dimensions, and byte inputs expose their buffer. The runtime
/// grows new kinds over time; anything unrecognized deserializes as
/// [`InputValue::Unsupported`] rather than failing the whole input set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputValue {
    Float {
        current: f32,
        min: f32,
        max: f32,
        default: f32,
    },
    Int {
        current: i32,
        min: i32,
        max: i32,
        default: i32,
        /// Named discrete choices, rendered as a dropdown instead of a slider.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        labels: Option<Vec<(String, i32)>>,
    },
    Point {
        current: [f32; 2],
        min: [f32; 2],
        max: [f32; 2],
        default: [f32; 2],
    },
    Bool {
        current: bool,
        default: bool,
    },
    Color {
        current: [f32; 4],
        default: [f32; 4],
    },
    Image {
        status: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
    RawBytes {
        bytes: Vec<u8>,
    },
    /// Any input kind this crate has no UI mapping for.
    #[serde(other)]
    Unsupported,
}

impl InputValue {
    pub fn variant(&self) -> InputVariant {
        match self {
            InputValue::Float { .. } => InputVariant::Float,
            InputValue::Int { .. } => InputVariant::Int,
            InputValue::Point { .. } => InputVariant::Point,
            InputValue::Bool { .. } => InputVariant::Bool,
            InputValue::Color { .. } => InputVariant::Color,
            InputValue::Image { .. } => InputVariant::Image,
            InputValue::RawBytes { .. } => InputVariant::RawBytes,
            InputValue::Unsupported => InputVariant::Unsupported,
        }
    }
}

/// Payload-free discriminant of [`InputValue`], used for routing and error
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputVariant {
    Float,
    Int,
    Point,
    Bool,
    Color,
    Image,
    RawBytes,
    Unsupported,
}

impl InputVariant {
    pub fn name(self) -> &'static str {
        match self {
            InputVariant::Float => "Float",
            InputVariant::Int => "Int",
            InputVariant::Point => "Point",
            InputVariant::Bool => "Bool",
            InputVariant::Color => "Color",
            InputVariant::Image => "Image",
            InputVariant::RawBytes => "RawBytes",
            InputVariant::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for InputVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_tagged_float() {
        let value: InputValue = serde_json::from_value(json!({
            "type": "Float",
            "current": 0.5,
            "min": 0.0,
            "max": 1.0,
            "default": 0.0,
        }))
        .unwrap();
        assert_eq!(
            value,
            InputValue::Float {
                current: 0.5,
                min: 0.0,
                max: 1.0,
                default: 0.0,
            }
        );
    }

    #[test]
    fn int_labels_are_optional() {
        let value: InputValue = serde_json::from_value(json!({
            "type": "Int",
            "current": 2,
            "min": 0,
            "max": 10,
            "default": 0,
        }))
        .unwrap();
        match value {
            InputValue::Int { labels, .. } => assert!(labels.is_none()),
            other => panic!("expected Int, got {:?}", other),
        }
    }

    #[test]
    fn int_labels_round_trip() {
        let original = InputValue::Int {
            current: 1,
            min: 0,
            max: 1,
            default: 0,
            labels: Some(vec![("Off".to_string(), 0), ("On".to_string(), 1)]),
        };
        let json = serde_json::to_value(&original).unwrap();
        assert_eq!(json["labels"], json!([["Off", 0], ["On", 1]]));
        let back: InputValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn image_dimensions_are_optional() {
        let value: InputValue = serde_json::from_value(json!({
            "type": "Image",
            "status": "uninit",
        }))
        .unwrap();
        assert_eq!(
            value,
            InputValue::Image {
                status: "uninit".to_string(),
                width: None,
                height: None,
            }
        );
        // Absent dimensions stay absent on the way back out
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, json!({ "type": "Image", "status": "uninit" }));
    }

    #[test]
    fn unknown_kind_becomes_unsupported() {
        let value: InputValue = serde_json::from_value(json!({
            "type": "AudioFft",
            "samples": 512,
        }))
        .unwrap();
        assert_eq!(value, InputValue::Unsupported);
    }

    #[test]
    fn variant_names() {
        let point = InputValue::Point {
            current: [0.0, 0.0],
            min: [0.0, 0.0],
            max: [1.0, 1.0],
            default: [0.0, 0.0],
        };
        assert_eq!(point.variant().to_string(), "Point");
        assert_eq!(InputValue::Unsupported.variant(), InputVariant::Unsupported);
    }
}
