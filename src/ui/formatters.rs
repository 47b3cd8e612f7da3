//! Shared formatting utilities for UI components.

/// Format an axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_smart_precision() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(5.0), "5.0");
        assert_eq!(format_axis_label(-2.5), "-2.5");
        assert_eq!(format_axis_label(250.0), "250");
        assert_eq!(format_axis_label(0.05), "0.05");
        assert_eq!(format_axis_label(1.0e6), "1.0e6");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }
}
