use serde::{Deserialize, Serialize};

use crate::elapsed::ElapsedTime;

const SEPARATOR: &str = " • ";

/// Arrangement of the elapsed time on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Everything on one line
    Wide,
    /// Days as a headline, the rest underneath
    Compact,
}

impl Layout {
    pub fn for_width(width_px: f64, wide_min_width_px: u32) -> Self {
        if width_px >= f64::from(wide_min_width_px) {
            Layout::Wide
        } else {
            Layout::Compact
        }
    }
}

/// Text the view renders for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub headline: String,
    pub subline: Option<String>,
}

impl DisplayView {
    pub fn render(elapsed: Option<&ElapsedTime>, layout: Layout, placeholder: &str) -> Self {
        let Some(elapsed) = elapsed else {
            return Self {
                headline: placeholder.to_string(),
                subline: None,
            };
        };

        match layout {
            Layout::Wide => Self {
                headline: format!("{}{}{}", days_text(elapsed), SEPARATOR, clock_text(elapsed)),
                subline: None,
            },
            Layout::Compact => Self {
                headline: days_text(elapsed),
                subline: Some(clock_text(elapsed)),
            },
        }
    }
}

fn days_text(elapsed: &ElapsedTime) -> String {
    format!("{} Days", elapsed.days)
}

fn clock_text(elapsed: &ElapsedTime) -> String {
    [
        format!("{} Hours", elapsed.hours),
        format!("{} Minutes", elapsed.minutes),
        format!("{} Seconds", elapsed.seconds),
    ]
    .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ElapsedTime {
        ElapsedTime {
            days: 12_345,
            hours: 6,
            minutes: 7,
            seconds: 8,
        }
    }

    #[test]
    fn test_wide_layout_single_line() {
        let view = DisplayView::render(Some(&sample()), Layout::Wide, "Dogs Live Long");
        assert_eq!(view.headline, "12345 Days • 6 Hours • 7 Minutes • 8 Seconds");
        assert_eq!(view.subline, None);
    }

    #[test]
    fn test_compact_layout_splits_days() {
        let view = DisplayView::render(Some(&sample()), Layout::Compact, "Dogs Live Long");
        assert_eq!(view.headline, "12345 Days");
        assert_eq!(view.subline.as_deref(), Some("6 Hours • 7 Minutes • 8 Seconds"));
    }

    #[test]
    fn test_placeholder_when_absent() {
        for layout in [Layout::Wide, Layout::Compact] {
            let view = DisplayView::render(None, layout, "Dogs Live Long");
            assert_eq!(view.headline, "Dogs Live Long");
            assert_eq!(view.subline, None);
        }
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(Layout::for_width(991.0, 992), Layout::Compact);
        assert_eq!(Layout::for_width(992.0, 992), Layout::Wide);
        assert_eq!(Layout::for_width(1440.0, 992), Layout::Wide);
        assert_eq!(Layout::for_width(375.0, 992), Layout::Compact);
    }
}
