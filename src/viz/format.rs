// src/viz/format.rs
//
// Display twins for the numeric fields. The dashboard shows these strings
// verbatim, so "N/A" stands in wherever the table had no data.

/// Humanise an absolute population count.
pub fn format_population(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "N/A".to_string();
    };
    if v.is_nan() || v == 0.0 {
        "N/A".to_string()
    } else if v >= 1_000_000_000.0 {
        format!("{:.2} billion", v / 1_000_000_000.0)
    } else if v >= 1_000_000.0 {
        format!("{:.2} million", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{:.2} thousand", v / 1_000.0)
    } else {
        format!("{}", v as i64)
    }
}

pub fn fmt1(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn fmt2(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Numeric twin of the display fields: missing becomes `default`.
pub fn or_default(value: Option<f64>, default: f64) -> f64 {
    value.unwrap_or(default)
}

pub fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_scales_by_magnitude() {
        assert_eq!(format_population(Some(8_045_311_000.0)), "8.05 billion");
        assert_eq!(format_population(Some(112_716_000.0)), "112.72 million");
        assert_eq!(format_population(Some(512_000.0)), "512.00 thousand");
        assert_eq!(format_population(Some(999.0)), "999");
    }

    #[test]
    fn missing_population_is_na() {
        assert_eq!(format_population(None), "N/A");
        assert_eq!(format_population(Some(0.0)), "N/A");
    }

    #[test]
    fn fixed_width_formatters_fall_back_to_na() {
        assert_eq!(fmt1(Some(21.46)), "21.5");
        assert_eq!(fmt2(Some(2.897)), "2.90");
        assert_eq!(fmt1(None), "N/A");
        assert_eq!(fmt2(None), "N/A");
    }
}
