//! Static font-metric tables for the three generic canvas font families.
//!
//! Character widths are in em units (relative to font size), taken from the standard
//! Times, Helvetica and Courier AFM tables. This is an approximation of what a browser
//! canvas `measureText` would report, good enough to drive greedy wrapping and
//! horizontal centering without a rasterizer.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// The generic CSS font families a card can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// Times-like serif. The card default.
    Serif,
    /// Helvetica/Arial-like sans-serif.
    SansSerif,
    /// Courier-like fixed pitch.
    Monospace,
}

impl FontFamily {
    /// The CSS generic family name.
    pub fn css_name(&self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serif" => Ok(FontFamily::Serif),
            "sans-serif" | "sans" => Ok(FontFamily::SansSerif),
            "monospace" | "mono" => Ok(FontFamily::Monospace),
            other => Err(format!("unknown font family '{other}'")),
        }
    }
}

/// A concrete font: family plus pixel size. Equivalent to a canvas `font` string
/// such as `"20px serif"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size_px: f32,
}

impl FontSpec {
    pub fn new(family: FontFamily, size_px: f32) -> Self {
        Self { family, size_px }
    }

    /// Rendered width of `text` in pixels.
    pub fn measure(&self, text: &str) -> f32 {
        get_metrics(&self.family).measure_str(text) * self.size_px
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em, covering 0x20 (space)
/// through 0x7E (~).
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Times Roman.
static SERIF_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0-9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.47,
};

/// Helvetica / Arial.
static SANS_SERIF_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.52,
};

/// Courier. Every glyph is 0.6em.
static MONOSPACE_TABLE: FontMetricTable = FontMetricTable {
    widths: [0.6; 95],
    average_char_width: 0.6,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Serif => &SERIF_TABLE,
        FontFamily::SansSerif => &SANS_SERIF_TABLE,
        FontFamily::Monospace => &MONOSPACE_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(&FontFamily::Serif);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_space_width_matches_table() {
        let metrics = get_metrics(&FontFamily::Serif);
        assert!((metrics.measure_str(" ") - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(&FontFamily::SansSerif);
        // "Bingo" = B(0.667) + i(0.222) + n(0.556) + g(0.556) + o(0.556) = 2.557
        let width = metrics.measure_str("Bingo");
        assert!(
            (width - 2.557).abs() < 1e-3,
            "Bingo width should be ~2.557, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(&FontFamily::Serif);
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_monospace_is_fixed_pitch() {
        let metrics = get_metrics(&FontFamily::Monospace);
        assert_eq!(metrics.measure_str("iiii"), metrics.measure_str("MMMM"));
    }

    #[test]
    fn test_font_spec_scales_by_pixel_size() {
        let font = FontSpec::new(FontFamily::Monospace, 20.0);
        // 5 chars × 0.6em × 20px
        assert!((font.measure("hello") - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_font_spec_display_is_css_shorthand() {
        let font = FontSpec::new(FontFamily::Serif, 20.0);
        assert_eq!(font.to_string(), "20px serif");
    }

    #[test]
    fn test_font_family_from_str() {
        assert_eq!("serif".parse::<FontFamily>(), Ok(FontFamily::Serif));
        assert_eq!("Sans-Serif".parse::<FontFamily>(), Ok(FontFamily::SansSerif));
        assert_eq!("mono".parse::<FontFamily>(), Ok(FontFamily::Monospace));
        assert!("comic".parse::<FontFamily>().is_err());
    }

    #[test]
    fn test_serif_narrower_than_sans_for_lowercase() {
        let text = "free space phrases";
        let serif = get_metrics(&FontFamily::Serif).measure_str(text);
        let sans = get_metrics(&FontFamily::SansSerif).measure_str(text);
        assert!(serif < sans, "serif {serif} should be narrower than sans {sans}");
    }
}
