/// Body-mass-index from height in centimeters and weight in kilograms
///
/// bmi = weight / (height / 100)^2
#[inline]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round the exact binary value to two decimals, ties to even
///
/// This is the rounding reported by the classifier: 20.125 becomes 20.12
/// and 20.375 becomes 20.38. Non-finite input is returned unchanged.
pub fn round_bmi(bmi: f64) -> f64 {
    if !bmi.is_finite() {
        return bmi;
    }

    // An exact tie is a value whose product with 200 is an odd integer
    // with no rounding error in the multiplication.
    let doubled = bmi * 200.0;
    let exact = bmi.mul_add(200.0, -doubled) == 0.0;
    if exact && doubled.fract() == 0.0 && doubled.rem_euclid(2.0) == 1.0 {
        let lower = (doubled / 2.0).floor();
        let even = if lower.rem_euclid(2.0) == 0.0 { lower } else { lower + 1.0 };
        return even / 100.0;
    }

    // fixed-precision formatting rounds the exact decimal expansion
    format!("{:.2}", bmi).parse().unwrap_or(bmi)
}

/// Half-up rounding to two decimals, used by the threshold fallback
#[inline]
pub fn round_bmi_half_up(bmi: f64) -> f64 {
    (bmi * 100.0).round() / 100.0
}
