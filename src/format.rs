//! Human-readable size formatting.

/// One formatting band: sizes from `floor` up to the next band's floor are
/// divided by `divisor` and labeled with `suffix`.
struct Band {
    floor: u64,
    divisor: u64,
    suffix: &'static str,
}

// Decimal multiples of 1000, not binary.
const BANDS: [Band; 4] = [
    Band {
        floor: 1,
        divisor: 1,
        suffix: "B",
    },
    Band {
        floor: 1_000,
        divisor: 1_000,
        suffix: "KB",
    },
    Band {
        floor: 1_000_000,
        divisor: 1_000_000,
        suffix: "MB",
    },
    Band {
        floor: 1_000_000_000,
        divisor: 1_000_000_000,
        suffix: "GB",
    },
];

/// Upper limit of the GB band.
const BAND_CEILING: u64 = 1_000_000_000_000;

/// Render a byte count against the band table. Sizes of exactly zero and
/// sizes at or above one terabyte have no rendering and return `None`.
pub fn human_size(bytes: u64) -> Option<String> {
    if bytes == 0 || bytes >= BAND_CEILING {
        return None;
    }

    let band = BANDS.iter().rev().find(|band| bytes >= band.floor)?;
    if band.divisor == 1 {
        Some(format!("{bytes}{}", band.suffix))
    } else {
        Some(format!(
            "{:.2}{}",
            bytes as f64 / band.divisor as f64,
            band.suffix
        ))
    }
}
