use photo_gallery_domain::ImageRef;

use crate::ApplicationError;

/// Serializes the gallery as a JSON array of strings.
pub fn encode_gallery(gallery: &[ImageRef]) -> Result<String, ApplicationError> {
    serde_json::to_string(gallery).map_err(|error| ApplicationError::Persistence(error.to_string()))
}

pub fn decode_gallery(raw: &str) -> Result<Vec<ImageRef>, ApplicationError> {
    serde_json::from_str(raw).map_err(|error| ApplicationError::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_order_and_duplicates() {
        let gallery = decode_gallery(r#"["b","a","b"]"#).expect("decode");
        let values: Vec<&str> = gallery.iter().map(ImageRef::as_str).collect();
        assert_eq!(values, vec!["b", "a", "b"]);
    }

    #[test]
    fn empty_array_decodes_to_empty_gallery() {
        assert!(decode_gallery("[]").expect("decode").is_empty());
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        assert!(matches!(
            decode_gallery("{not json"),
            Err(ApplicationError::Decode(_))
        ));
        assert!(matches!(
            decode_gallery("null"),
            Err(ApplicationError::Decode(_))
        ));
    }

    #[test]
    fn encoded_form_is_a_json_string_array() {
        let gallery = vec![ImageRef::new("file:///a.jpg").expect("ref")];
        assert_eq!(
            encode_gallery(&gallery).expect("encode"),
            r#"["file:///a.jpg"]"#
        );
    }
}
