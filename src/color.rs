use egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Which color source is used when a cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// A fresh random color for every painted cell
    #[default]
    Random,
    /// The color last chosen in the color picker
    Fixed,
}

impl ColorMode {
    pub fn from_random_checked(checked: bool) -> Self {
        if checked { Self::Random } else { Self::Fixed }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Fixed => "Fixed",
        }
    }
}

fn fresh_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Supplies the color for each paint operation.
///
/// Only the mode and the fixed color survive a restart; the RNG and the
/// supplied-color counter are runtime state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorProvider {
    mode: ColorMode,
    fixed_color: Color32,
    #[serde(skip, default = "fresh_rng")]
    rng: StdRng,
    #[serde(skip)]
    supplied: u64,
}

impl Default for ColorProvider {
    fn default() -> Self {
        Self::with_rng(fresh_rng())
    }
}

impl ColorProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic provider for tests and reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            mode: ColorMode::default(),
            fixed_color: Color32::BLACK,
            rng,
            supplied: 0,
        }
    }

    /// The color for the next paint operation.
    ///
    /// In `Random` mode every call draws each channel independently from
    /// `0..=255`; nothing is cached between calls.
    pub fn current_color(&mut self) -> Color32 {
        self.supplied += 1;
        match self.mode {
            ColorMode::Random => Color32::from_rgb(
                self.rng.gen_range(0..=u8::MAX),
                self.rng.gen_range(0..=u8::MAX),
                self.rng.gen_range(0..=u8::MAX),
            ),
            ColorMode::Fixed => self.fixed_color,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    pub fn fixed_color(&self) -> Color32 {
        self.fixed_color
    }

    /// Commit a value from the color picker. Any color the picker produces is trusted as-is.
    pub fn set_fixed_color(&mut self, color: Color32) {
        self.fixed_color = color;
    }

    /// Number of colors handed out so far
    pub fn supplied(&self) -> u64 {
        self.supplied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_mode_counts_every_call() {
        let mut colors = ColorProvider::seeded(7);
        assert_eq!(colors.mode(), ColorMode::Random);

        let drawn: Vec<Color32> = (0..64).map(|_| colors.current_color()).collect();
        assert_eq!(colors.supplied(), 64);

        // Channels are u8 so the range is implied; check they are opaque and not all identical
        assert!(drawn.iter().all(|c| c.a() == 255));
        assert!(drawn.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_random_mode_covers_channel_extremes() {
        let mut colors = ColorProvider::seeded(42);
        let mut low = u8::MAX;
        let mut high = u8::MIN;
        for _ in 0..4096 {
            let c = colors.current_color();
            low = low.min(c.r()).min(c.g()).min(c.b());
            high = high.max(c.r()).max(c.g()).max(c.b());
        }
        assert!(low < 8);
        assert!(high > 247);
    }

    #[test]
    fn test_fixed_mode_is_stable_until_changed() {
        let mut colors = ColorProvider::seeded(1);
        colors.set_mode(ColorMode::Fixed);
        colors.set_fixed_color(Color32::from_rgb(12, 34, 56));

        assert_eq!(colors.current_color(), Color32::from_rgb(12, 34, 56));
        assert_eq!(colors.current_color(), Color32::from_rgb(12, 34, 56));

        colors.set_fixed_color(Color32::RED);
        assert_eq!(colors.current_color(), Color32::RED);
        assert_eq!(colors.supplied(), 3);
    }

    #[test]
    fn test_mode_from_checkbox() {
        assert_eq!(ColorMode::from_random_checked(true), ColorMode::Random);
        assert_eq!(ColorMode::from_random_checked(false), ColorMode::Fixed);
        assert_eq!(ColorMode::Fixed.label(), "Fixed");
    }
}
