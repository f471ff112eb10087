//! Number formatting for cards and the detail view.

/// Compact population: `500`, `1.5K`, `2.3M`.
pub fn format_population(population: u64) -> String {
    if population >= 1_000_000 {
        return format!("{:.1}M", population as f64 / 1_000_000.0);
    }
    if population >= 1_000 {
        return format!("{:.1}K", population as f64 / 1_000.0);
    }
    population.to_string()
}

/// Integer with `,` thousands separators: `1234567` → `1,234,567`.
pub fn format_count(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Area in square kilometres with thousands separators and at most three
/// fraction digits: `1000.0` → `1,000 km²`, `0.44` → `0.44 km²`.
pub fn format_area(area: f64) -> String {
    if !area.is_finite() {
        return format!("{area} km²");
    }

    let fixed = format!("{:.3}", area.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let sign = if area < 0.0 && fixed != "0.000" { "-" } else { "" };
    let grouped = group_thousands(int_part);

    if frac_part.is_empty() {
        format!("{sign}{grouped} km²")
    } else {
        format!("{sign}{grouped}.{frac_part} km²")
    }
}

/// Inserts `,` every three digits from the right. Expects ASCII digits only.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
