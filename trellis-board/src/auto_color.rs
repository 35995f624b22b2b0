//! Deterministic auto-color assignment for columns and avatars.
//!
//! Maps a group id (or member id) to a color from a curated palette using a
//! simple hash, so a column keeps its accent across sessions without
//! storing anything. The palette is designed to look good on both light and
//! dark backgrounds.

/// Curated palette of 16 accent colors (6-char hex without `#`).
const PALETTE: &[&str] = &[
    "d73a4a", // red
    "e36209", // orange
    "f9c513", // yellow
    "0e8a16", // green
    "006b75", // teal
    "1d76db", // blue
    "5319e7", // purple
    "b60205", // dark red
    "d876e3", // pink
    "0075ca", // ocean
    "7057ff", // violet
    "008672", // sea green
    "e4e669", // lime
    "bfd4f2", // light blue
    "c5def5", // periwinkle
    "fbca04", // gold
];

/// Return a deterministic color for a group or member id.
///
/// Uses a simple FNV-1a hash mapped to the palette index.
pub fn auto_color(id: &str) -> &'static str {
    let hash = fnv1a(id);
    let idx = (hash as usize) % PALETTE.len();
    PALETTE[idx]
}

/// FNV-1a hash (32-bit) for short strings.
fn fnv1a(s: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_color_deterministic() {
        let c1 = auto_color("todo");
        let c2 = auto_color("todo");
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_auto_color_valid_hex() {
        for id in &["todo", "done", "unassigned", "overdue", "high"] {
            let color = auto_color(id);
            assert_eq!(color.len(), 6);
            assert!(color.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_palette_coverage() {
        // With enough ids, we should hit multiple palette entries
        let mut seen = std::collections::HashSet::new();
        for i in 0..100 {
            let id = format!("member-{}", i);
            seen.insert(auto_color(&id));
        }
        assert!(seen.len() >= 8, "Only hit {} palette entries", seen.len());
    }
}
