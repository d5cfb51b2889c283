//! Counting animation for the statistics strip.
//!
//! The displayed value is a pure function of elapsed time, so the end state
//! does not depend on how regularly frames arrive.

/// Reads a `data-target` attribute the way a browser `parseInt` would:
/// leading whitespace, optional sign, then as many digits as follow.
/// Anything missing, negative or unreadable counts as zero.
pub fn parse_target(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..digits_end].parse::<u64>().unwrap_or(0);
    if negative {
        0
    } else {
        value
    }
}

/// en-US digit grouping: `2500` -> `"2,500"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `target / 1000` with one decimal, rounded like JavaScript's `toFixed(1)`.
/// Only targets ending in 250 or 750 land exactly halfway between two tenths;
/// those round up, where `{:.1}` would round to even.
fn thousands_one_decimal(target: u64) -> String {
    if target % 500 == 250 {
        let tenths = (target + 50) / 100;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}", target as f64 / 1000.0)
    }
}

/// Text shown once the count has finished. The suffix is picked from the
/// stat's label; without a label the plain grouped number is shown.
pub fn final_text(target: u64, label: Option<&str>) -> String {
    let Some(label) = label else {
        return format_thousands(target);
    };
    let label = label.to_lowercase();
    if label.contains("minute") {
        format!("{} min", target)
    } else if label.contains("satisfaction") || label.contains('%') {
        format!("{}%", target)
    } else if target >= 1000 {
        format!("{}k+", thousands_one_decimal(target))
    } else {
        format!("{}+", target)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    label: Option<String>,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, label: Option<String>, duration_ms: u32) -> Self {
        Self {
            target,
            label,
            duration_ms: f64::from(duration_ms),
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value reached after `elapsed_ms`, clamped to the target.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if self.duration_ms <= 0.0 {
            return self.target;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        ((self.target as f64 * t).floor() as u64).min(self.target)
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        let value = self.value_at(elapsed_ms);
        if value >= self.target {
            CounterFrame {
                text: final_text(self.target, self.label.as_deref()),
                done: true,
            }
        } else {
            CounterFrame {
                text: format_thousands(value),
                done: false,
            }
        }
    }
}
