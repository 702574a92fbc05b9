use std::cmp::Ordering;

/// Zero-pad or truncate `raw` to exactly `expected_len` bytes.
///
/// Size mismatches are not errors: short dumps are padded with black and long
/// ones are cut, so a partial capture still produces an image.
pub fn normalize_buffer(mut raw: Vec<u8>, expected_len: usize) -> Vec<u8> {
    match raw.len().cmp(&expected_len) {
        Ordering::Less => {
            tracing::debug!(
                have = raw.len(),
                expected = expected_len,
                "zero-padding pixel buffer"
            );
            raw.resize(expected_len, 0);
        }
        Ordering::Greater => {
            tracing::debug!(
                have = raw.len(),
                expected = expected_len,
                "truncating pixel buffer"
            );
            raw.truncate(expected_len);
        }
        Ordering::Equal => {}
    }
    raw
}

#[cfg(test)]
#[path = "../../tests/unit/layout/buffer.rs"]
mod tests;
