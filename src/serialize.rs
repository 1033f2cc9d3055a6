use crate::error::EvaluationError;
use crate::signal::SignalCell;
use crate::value::Signalable;

/// The canonical string form of `value`. Deterministic across runs, and `T::parse` maps it back
/// to an equal value.
pub fn serialize<T: Signalable>(value: &T) -> String {
    value.serialize()
}

/// The canonical string form of the current value of `signal`, evaluating it if it is dirty.
pub fn serialize_signal<T: Signalable>(signal: &SignalCell<T>) -> Result<String, EvaluationError> {
    let value = signal.get()?;
    Ok(serialize(&value))
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use crate::value::Signalable;
    use crate::Color;

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&Signalable::serialize(self))
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, SignalContext};

    #[test]
    fn serialization_is_deterministic() {
        let first = serialize(&"red".parse::<Color>().unwrap());
        let second = serialize(&"red".parse::<Color>().unwrap());
        assert_eq!("rgb(255,0,0)", first);
        assert_eq!(first, second);
    }

    #[test]
    fn serialize_computed_signal() {
        let signal = SignalContext::<Color>::new()
            .create_signal("white")
            .unwrap();
        signal.set_expression(|| "#00000080");

        assert_eq!("rgba(0,0,0,0.502)", serialize_signal(&signal).unwrap());
    }

    #[test]
    fn serialize_numbers() {
        let signal = SignalContext::<f64>::new().create_signal(0.75).unwrap();
        assert_eq!("0.75", serialize_signal(&signal).unwrap());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{Color, ColorComponents};

    #[test]
    fn color_serde_roundtrip() {
        let original = Color::from_rgba(255, 127, 4, 0.5);

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!("\"rgba(255,127,4,0.5)\"", serialized);

        let deserialized: Color = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn color_deserializes_any_text_form() {
        let color: Color = serde_json::from_str("\"deeppink\"").unwrap();
        assert_eq!(Color::from_rgb(255, 20, 147), color);

        assert!(serde_json::from_str::<Color>("\"not a color\"").is_err());
    }

    #[test]
    fn components_serde_roundtrip() {
        let original = ColorComponents::with_alpha(1.0, 2.0, 3.0, 0.5);

        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: ColorComponents = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
