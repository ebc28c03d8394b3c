//! Weight units and conversion to grams
//!
//! Ingredients are weighed in grams; these helpers let callers express a
//! quantity in any common weight unit, or in a custom unit annotated with its
//! gram weight (e.g. `"slice (28g)"`).

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Get the conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();

    match lower.trim() {
        "g" | "gram" | "grams" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Parse a gram annotation like "20g", "20 g" or "20 grams"
fn parse_gram_annotation(s: &str) -> Option<f64> {
    let lower = s.to_lowercase();
    let trimmed = lower.trim();

    // Longest suffix first so "20 grams" is not read as "20 gram" + "s"
    for suffix in ["grams", "gram", "g"] {
        if let Some(num_part) = trimmed.strip_suffix(suffix) {
            if let Ok(val) = num_part.trim().parse::<f64>() {
                return Some(val);
            }
        }
    }

    None
}

/// Grams in one of the given unit, honouring a `(NNg)` annotation
fn unit_weight(unit: &str) -> Option<f64> {
    let trimmed = unit.trim();

    if let (Some(open), Some(close)) = (trimmed.find('('), trimmed.rfind(')')) {
        if open < close {
            if let Some(grams) = parse_gram_annotation(&trimmed[open + 1..close]) {
                return Some(grams);
            }
            return grams_per_unit(&trimmed[..open]);
        }
    }

    grams_per_unit(trimmed)
}

/// Convert a quantity in the given unit to grams
///
/// Returns None when the unit is not a weight and carries no gram annotation.
pub fn to_grams(quantity: f64, unit: &str) -> Option<f64> {
    unit_weight(unit).map(|grams_per| quantity * grams_per)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(grams_per_unit("g"), Some(1.0));
        assert_eq!(grams_per_unit(" Grams "), Some(1.0));
        assert_eq!(grams_per_unit("kg"), Some(G_PER_KG));
        assert_eq!(grams_per_unit("oz"), Some(G_PER_OZ));
        assert_eq!(grams_per_unit("lb"), Some(G_PER_LB));
        assert_eq!(grams_per_unit("tbsp"), None);
    }

    #[test]
    fn test_to_grams_weight_units() {
        assert_eq!(to_grams(250.0, "g"), Some(250.0));
        assert_eq!(to_grams(1.5, "kg"), Some(1500.0));

        let grams = to_grams(2.0, "oz").unwrap();
        assert!((grams - 56.699).abs() < 0.001);
    }

    #[test]
    fn test_to_grams_annotated_unit() {
        assert_eq!(to_grams(3.0, "slice (28g)"), Some(84.0));
        assert_eq!(to_grams(2.0, "scoop (30 grams)"), Some(60.0));
    }

    #[test]
    fn test_to_grams_unknown_unit() {
        assert_eq!(to_grams(1.0, "cup"), None);
        assert_eq!(to_grams(1.0, "slice"), None);
        assert_eq!(to_grams(1.0, "slice (thick)"), None);
    }
}
