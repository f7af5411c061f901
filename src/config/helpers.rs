use std::{fmt, time::Duration};

use serde::{de, Deserialize, Deserializer};

/// Custom deserializer for Duration from milliseconds
pub fn deserialize_duration_from_ms<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(ms))
}

/// Custom deserializer for Duration from seconds
pub fn deserialize_duration_from_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs))
}

/// Custom deserializer for an RGB accent color.
///
/// Accepts a plain integer (including YAML `0x`-literals) or a string in
/// `"#RRGGBB"` / `"0xRRGGBB"` / `"RRGGBB"` form.
pub fn deserialize_color<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct ColorVisitor;

    impl de::Visitor<'_> for ColorVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an RGB color as an integer or a \"#RRGGBB\" string")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
            if value > 0xFF_FF_FF {
                return Err(E::custom(format!("color {value:#x} is out of RGB range")));
            }
            Ok(value as u32)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
            if value < 0 {
                return Err(E::custom("color must not be negative"));
            }
            self.visit_u64(value as u64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
            let hex = value.trim().trim_start_matches('#');
            let hex = hex.strip_prefix("0x").unwrap_or(hex);
            let color = u32::from_str_radix(hex, 16)
                .map_err(|e| E::custom(format!("invalid color '{value}': {e}")))?;
            if color > 0xFF_FF_FF {
                return Err(E::custom(format!("color '{value}' is out of RGB range")));
            }
            Ok(color)
        }
    }

    deserializer.deserialize_any(ColorVisitor)
}
