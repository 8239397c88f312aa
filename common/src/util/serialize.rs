pub mod base64 {
    use base64::engine::general_purpose;
    use base64::Engine;

    use crate::error::ConvertError;

    /// Decodes standard padded base64, ignoring embedded ASCII whitespace so line-wrapped payloads pass.
    pub fn decode_inline(data: &str) -> Result<Vec<u8>, ConvertError> {
        let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        general_purpose::STANDARD.decode(compact.as_bytes()).map_err(|e| ConvertError::Input(format!("Invalid base64 data: {}", e)))
    }

}
