//! Elapsed time and progress bar formatting

/// Number of glyphs in the rendered progress bar
pub const BAR_WIDTH: usize = 10;

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';

/// Render elapsed time and a progress bar for the current cycle.
///
/// `interval_seconds` must be positive.
pub fn format(elapsed_seconds: u64, interval_seconds: u64, bar_width: usize) -> (String, String) {
    (
        format_time(elapsed_seconds),
        format_bar(elapsed_seconds, interval_seconds, bar_width),
    )
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Build a bar of `bar_width` glyphs, filled in proportion to elapsed time
pub fn format_bar(elapsed_seconds: u64, interval_seconds: u64, bar_width: usize) -> String {
    let filled = filled_segments(elapsed_seconds, interval_seconds, bar_width);
    let mut bar = String::with_capacity(bar_width * EMPTY_GLYPH.len_utf8());
    bar.extend(std::iter::repeat(FILLED_GLYPH).take(filled));
    bar.extend(std::iter::repeat(EMPTY_GLYPH).take(bar_width - filled));
    bar
}

fn filled_segments(elapsed_seconds: u64, interval_seconds: u64, bar_width: usize) -> usize {
    // u128 keeps width * elapsed from overflowing.
    let filled = (bar_width as u128 * elapsed_seconds as u128) / interval_seconds as u128;
    filled.min(bar_width as u128) as usize
}
