// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp rendering for composed writes. Formatting is not uniform across
/// pages: the joining workflow writes `YYYY-MM-DD HH:MM:SS` while the call
/// tracker writes `MM/DD/YYYY HH:MM:SS`. Both are zero-padded, 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    IsoSeconds,
    UsSlash,
}

impl TimestampFormat {
    #[must_use]
    pub fn render(self, at: NaiveDateTime) -> String {
        match self {
            Self::IsoSeconds => at.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::UsSlash => at.format("%m/%d/%Y %H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .expect("date")
            .and_hms_opt(9, 5, 4)
            .expect("time")
    }

    #[test]
    fn both_formats_zero_pad_components() {
        assert_eq!(
            TimestampFormat::IsoSeconds.render(sample()),
            "2024-03-07 09:05:04"
        );
        assert_eq!(
            TimestampFormat::UsSlash.render(sample()),
            "03/07/2024 09:05:04"
        );
    }
}
