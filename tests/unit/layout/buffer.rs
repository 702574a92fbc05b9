use super::*;

#[test]
fn short_buffer_is_zero_padded() {
    let raw = vec![7u8; 100];
    let out = normalize_buffer(raw, 108);
    assert_eq!(out.len(), 108);
    assert!(out[..100].iter().all(|&b| b == 7));
    assert!(out[100..].iter().all(|&b| b == 0));
}

#[test]
fn long_buffer_is_truncated() {
    let raw: Vec<u8> = (0..=255).collect();
    let out = normalize_buffer(raw.clone(), 64);
    assert_eq!(out, raw[..64]);
}

#[test]
fn exact_buffer_is_unchanged() {
    let raw: Vec<u8> = (0..48).collect();
    assert_eq!(normalize_buffer(raw.clone(), 48), raw);
}

#[test]
fn normalizing_twice_is_idempotent() {
    for (len, expected) in [(0usize, 12usize), (5, 12), (12, 12), (40, 12)] {
        let raw: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let once = normalize_buffer(raw, expected);
        let twice = normalize_buffer(once.clone(), expected);
        assert_eq!(once, twice);
    }
}
