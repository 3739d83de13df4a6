/// base64 encode the header and the payload as two separate groups and join them.
///
/// VTK decodes the header group on its own before it looks at the payload, so the two are
/// never encoded as one group.
pub fn encode_text(header: &[u8], payload: &[u8]) -> String {
    let mut text = String::with_capacity(4 * (header.len() + payload.len() + 4) / 3 + 4);
    base64::encode_config_buf(header, base64::STANDARD, &mut text);
    base64::encode_config_buf(payload, base64::STANDARD, &mut text);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_padded_independently() {
        // a 4 byte header always ends in `==`
        let text = encode_text(&[12, 0, 0, 0], &[0, 0, 0, 0, 1, 0, 0, 0, 4, 0, 0, 0]);
        assert_eq!(text, "DAAAAA==AAAAAAEAAAAEAAAA");
    }

    #[test]
    fn differs_from_single_group() {
        let header = [3, 0, 0, 0];
        let payload = [1, 2, 3];

        assert_ne!(
            encode_text(&header, &payload),
            base64::encode([&header[..], &payload[..]].concat())
        );
    }

    #[test]
    fn empty_payload_is_header_only() {
        assert_eq!(encode_text(&[0, 0, 0, 0], &[]), "AAAAAA==");
    }
}
