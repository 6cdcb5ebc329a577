use std::fmt::{Debug, Display};

// Numeric precisions a layer can be instantiated for
pub trait Element:
    Copy + Send + Sync + PartialEq + PartialOrd + Debug + Display + Default + 'static
{
    const NAME: &'static str;

    fn ceil(self) -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;

    // NaN never equals its own ceiling, so it is rejected here too
    fn is_integral(self) -> bool {
        self == self.ceil()
    }

    // Candidate index for an integral, finite, non-negative value
    fn to_index(self) -> Option<usize> {
        let value = self.to_f64();
        if !value.is_finite() || value < 0.0 || value != value.ceil() || value > usize::MAX as f64 {
            return None;
        }
        Some(value as usize)
    }
}

impl Element for f32 {
    const NAME: &'static str = "f32";

    fn ceil(self) -> Self {
        f32::ceil(self)
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    const NAME: &'static str = "f64";

    fn ceil(self) -> Self {
        f64::ceil(self)
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_map_to_indices() {
        assert_eq!(0.0f32.to_index(), Some(0));
        assert_eq!(3.0f64.to_index(), Some(3));
        assert!(2.0f32.is_integral());
    }

    #[test]
    fn fractional_and_negative_values_are_rejected() {
        assert!(!1.5f32.is_integral());
        assert_eq!(1.5f32.to_index(), None);
        assert!((-1.0f64).is_integral());
        assert_eq!((-1.0f64).to_index(), None);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(!f32::NAN.is_integral());
        assert_eq!(f64::INFINITY.to_index(), None);
        assert_eq!(f32::NAN.to_index(), None);
    }
}
