/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// One sparkline cell for a score, scaled against `max`.
pub fn spark_cell(value: u32, max: u32) -> char {
    const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if value == 0 || max == 0 {
        return '·';
    }
    let ratio = (value as f64 / max as f64).min(1.0);
    let idx = ((ratio * (LEVELS.len() - 1) as f64).round()) as usize;
    LEVELS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_full_and_empty() {
        assert_eq!(progress_bar(0, 10, 4), "░░░░");
        assert_eq!(progress_bar(10, 10, 4), "████");
        assert_eq!(progress_bar(5, 0, 4), "░░░░");
    }

    #[test]
    fn spark_cell_bounds() {
        assert_eq!(spark_cell(0, 60), '·');
        assert_eq!(spark_cell(60, 60), '█');
        assert_eq!(spark_cell(90, 60), '█');
    }
}
