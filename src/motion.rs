//! Animation parameters and the little math behind them. Everything here is
//! pure; components turn the numbers into inline styles.

/// A blurred background shape that drifts with the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub class: &'static str,
    pub parallax: f64,
    pub float_secs: f64,
    pub delay_secs: f64,
}

pub const BLOBS: [Blob; 3] = [
    Blob { class: "blob blob-blue", parallax: 0.02, float_secs: 4.0, delay_secs: 0.0 },
    Blob { class: "blob blob-pink", parallax: -0.015, float_secs: 6.0, delay_secs: 1.0 },
    Blob { class: "blob blob-green", parallax: 0.01, float_secs: 5.0, delay_secs: 2.0 },
];

/// Small dots floating in place, no parallax.
pub const DOTS: [(&str, f64, f64); 3] = [
    ("dot dot-blue", 4.0, 0.0),
    ("dot dot-purple", 3.0, 0.5),
    ("dot dot-pink", 4.0, 1.5),
];

pub const SPARKLES: usize = 5;

pub fn parallax(pointer: (f64, f64), factor: f64) -> (f64, f64) {
    (pointer.0 * factor, pointer.1 * factor)
}

pub fn translate(offset: (f64, f64)) -> String {
    format!("transform: translate({:.2}px, {:.2}px);", offset.0, offset.1)
}

/// Delay for the `index`-th item of a staggered group, in milliseconds.
pub fn stagger_ms(index: usize, base_ms: u32, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

/// `top`/`left` percentages and animation delay (ms) of the `index`-th sparkle.
pub fn sparkle(index: usize) -> (u32, u32, u32) {
    let i = u32::try_from(index).unwrap_or(u32::MAX);
    (20u32.saturating_add(i.saturating_mul(15)), 10u32.saturating_add(i.saturating_mul(20)), i.saturating_mul(500))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_scales_pointer() {
        assert_eq!(parallax((100.0, 50.0), 0.02), (2.0, 1.0));
        assert_eq!(parallax((200.0, 400.0), -0.015), (-3.0, -6.0));
        assert_eq!(parallax((0.0, 0.0), 0.01), (0.0, 0.0));
    }

    #[test]
    fn translate_formats_pixels() {
        assert_eq!(translate((2.0, -1.5)), "transform: translate(2.00px, -1.50px);");
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_ms(0, 0, 200), 0);
        assert_eq!(stagger_ms(2, 0, 200), 400);
        assert_eq!(stagger_ms(3, 200, 160), 680);
        assert_eq!(stagger_ms(usize::MAX, 1, 2), u32::MAX);
    }

    #[test]
    fn sparkles_spread_across_panel() {
        let placed: Vec<_> = (0..SPARKLES).map(sparkle).collect();
        assert_eq!(placed[0], (20, 10, 0));
        assert_eq!(placed[4], (80, 90, 2000));
        assert!(placed.iter().all(|(top, left, _)| *top < 100 && *left < 100));
    }

    #[test]
    fn blobs_drift_in_mixed_directions() {
        assert!(BLOBS.iter().any(|b| b.parallax < 0.0));
        assert!(BLOBS.iter().any(|b| b.parallax > 0.0));
    }
}
