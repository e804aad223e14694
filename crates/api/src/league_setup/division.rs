use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Competitive tiers a team can be registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    Upper,
    Lower,
    Premier,
    First,
    Second,
    Third,
}

static BY_KEY: Lazy<HashMap<String, Division>> = Lazy::new(|| {
    Division::ALL
        .iter()
        .map(|d| (normalize(d.label()), *d))
        .collect()
});

impl Division {
    pub const ALL: [Division; 6] = [
        Division::Upper,
        Division::Lower,
        Division::Premier,
        Division::First,
        Division::Second,
        Division::Third,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Division::Upper => "Upper Division",
            Division::Lower => "Lower Division",
            Division::Premier => "Premier",
            Division::First => "1st Division",
            Division::Second => "2nd Division",
            Division::Third => "3rd Division",
        }
    }

    /// Look up a division by label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Option<Division> {
        BY_KEY.get(&normalize(label)).copied()
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Division equality as applied to stored team data: trimmed and
/// case-insensitive on both sides. A blank division matches nothing.
pub fn same_division(a: &str, b: &str) -> bool {
    let a = normalize(a);
    !a.is_empty() && a == normalize(b)
}
