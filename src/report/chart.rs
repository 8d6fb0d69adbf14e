// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed-width horizontal bar charts built from eighth-block glyphs.

/// Width of the bars in the discipline summary.
pub const BAR_WIDTH: usize = 19;

/// Empty cell, seven partial eighths, full cell.
const GLYPHS: [char; 9] = ['░', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
const EMPTY: char = GLYPHS[0];
const FULL: char = GLYPHS[8];

/// Render `percent` (0-100) as a bar exactly `size` cells wide.
pub fn render_bar(percent: f64, size: usize) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };

    let eighths = (size as f64 * 8.0 * percent / 100.0).floor() as usize;
    let full = eighths / 8;
    if full >= size {
        return FULL.to_string().repeat(size);
    }

    let mut bar = String::with_capacity(size * FULL.len_utf8());
    bar.extend(std::iter::repeat(FULL).take(full));
    bar.push(GLYPHS[eighths % 8]);
    bar.extend(std::iter::repeat(EMPTY).take(size - full - 1));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert_eq!(render_bar(0.0, BAR_WIDTH), "░".repeat(BAR_WIDTH));
        assert_eq!(render_bar(100.0, BAR_WIDTH), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_width_is_constant() {
        for step in 0..=1000 {
            let percent = step as f64 / 10.0;
            assert_eq!(render_bar(percent, BAR_WIDTH).chars().count(), BAR_WIDTH);
        }
        assert_eq!(render_bar(f64::NAN, 5).chars().count(), 5);
        assert_eq!(render_bar(250.0, 5), "█████");
    }

    #[test]
    fn test_partial_cells() {
        // 50% of 4 cells = 16 eighths = 2 full cells
        assert_eq!(render_bar(50.0, 4), "██░░");
        // 25% of 3 cells = 6 eighths
        assert_eq!(render_bar(25.0, 3), "▊░░");
        // 60% of 19 cells = 91.2 -> 91 eighths = 11 full + 3/8
        assert_eq!(render_bar(60.0, 19), format!("{}▍{}", "█".repeat(11), "░".repeat(7)));
    }
}
