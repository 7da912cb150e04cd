//! Decoding of the Replicate prediction `output` field.
//!
//! The model returns one of several shapes depending on API version: a
//! bare URL string, an array of URL strings, or a file object carrying a
//! `url` field. The shape is resolved exactly once here; the rest of the
//! pipeline only ever sees a plain URL or a [`GenerationError`].

use serde_json::Value;

use crate::GenerationError;

/// Decode a prediction output value into the generated image URL.
pub fn decode_output(output: &Value) -> Result<String, GenerationError> {
    match output {
        Value::String(url) => Ok(url.clone()),
        Value::Array(items) => match items.first() {
            Some(Value::String(url)) => Ok(url.clone()),
            Some(other) => Err(GenerationError::Protocol(format!(
                "array output with non-string first element: {other}"
            ))),
            None => Err(GenerationError::Protocol("empty array output".into())),
        },
        Value::Object(map) => match map.get("url") {
            Some(Value::String(url)) => Ok(url.clone()),
            _ => Err(GenerationError::Protocol(
                "object output without a string 'url' field".into(),
            )),
        },
        other => Err(GenerationError::Protocol(format!(
            "unsupported output value: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_string_is_accepted() {
        let url = decode_output(&json!("https://gen.example/x.jpg")).unwrap();
        assert_eq!(url, "https://gen.example/x.jpg");
    }

    #[test]
    fn first_element_of_string_array_is_taken() {
        let url = decode_output(&json!(["https://gen.example/a.png", "https://gen.example/b.png"]))
            .unwrap();
        assert_eq!(url, "https://gen.example/a.png");
    }

    #[test]
    fn object_with_url_field_is_accepted() {
        let url = decode_output(&json!({"url": "https://gen.example/x.webp"})).unwrap();
        assert_eq!(url, "https://gen.example/x.webp");
    }

    #[test]
    fn object_without_url_is_rejected() {
        let err = decode_output(&json!({"path": "/tmp/x.jpg"})).unwrap_err();
        assert!(matches!(err, GenerationError::Protocol(_)));
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = decode_output(&json!([])).unwrap_err();
        assert!(matches!(err, GenerationError::Protocol(_)));
    }

    #[test]
    fn scalar_non_string_is_rejected() {
        assert!(matches!(
            decode_output(&json!(42)),
            Err(GenerationError::Protocol(_))
        ));
        assert!(matches!(
            decode_output(&json!(null)),
            Err(GenerationError::Protocol(_))
        ));
    }
}
