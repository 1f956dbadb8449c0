//! Score to severity band mapping

use crate::SeverityBand;

/// Highest score still rated Green
pub const GREEN_MAX: u32 = 8;
/// Highest score still rated Amber
pub const AMBER_MAX: u32 = 15;

/// Bucket a score into its severity band
pub fn calculate_band(score: u32) -> SeverityBand {
    if score <= GREEN_MAX {
        SeverityBand::Green
    } else if score <= AMBER_MAX {
        SeverityBand::Amber
    } else {
        SeverityBand::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(calculate_band(0), SeverityBand::Green);
        assert_eq!(calculate_band(8), SeverityBand::Green);
        assert_eq!(calculate_band(9), SeverityBand::Amber);
        assert_eq!(calculate_band(15), SeverityBand::Amber);
        assert_eq!(calculate_band(16), SeverityBand::Red);
        assert_eq!(calculate_band(23), SeverityBand::Red);
    }
}
