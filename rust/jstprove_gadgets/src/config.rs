//! JSON configuration for the field and the bounded comparator.
//!
//! Big integers are carried as decimal strings, since JSON numbers cannot
//! represent field-sized values.
//!
//! ```json
//! {
//!   "field": "bn254",
//!   "comparator": { "abs_diff_upp": "1048576", "allow_non_determinism": false }
//! }
//! ```

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::field::FieldOrder;
use crate::gadgets::BoundedComparator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPreset {
    Bn254,
    Goldilocks,
    Mersenne31,
    Custom { modulus: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    pub abs_diff_upp: String,
    #[serde(default)]
    pub allow_non_determinism: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GadgetConfig {
    pub field: FieldPreset,
    #[serde(default)]
    pub comparator: Option<ComparatorConfig>,
}

impl GadgetConfig {
    /// # Errors
    /// - [`ConfigError::Json`] on malformed input.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// # Errors
    /// - [`ConfigError::InvalidInteger`] if a custom modulus is not decimal.
    /// - [`ConfigError::Gadget`] if the modulus is below 2.
    pub fn field_order(&self) -> Result<FieldOrder, ConfigError> {
        match &self.field {
            FieldPreset::Bn254 => Ok(FieldOrder::bn254()),
            FieldPreset::Goldilocks => Ok(FieldOrder::goldilocks()),
            FieldPreset::Mersenne31 => Ok(FieldOrder::mersenne31()),
            FieldPreset::Custom { modulus } => {
                let modulus = modulus
                    .trim()
                    .parse::<BigUint>()
                    .map_err(|_| ConfigError::InvalidInteger {
                        field: "field.custom.modulus",
                        value: modulus.clone(),
                    })?;
                Ok(FieldOrder::new(modulus)?)
            }
        }
    }

    /// Builds the configured comparator, if any.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidInteger`] if `abs_diff_upp` is not decimal.
    /// - [`ConfigError::Gadget`] if the bound is rejected for the field.
    pub fn bounded_comparator(&self) -> Result<Option<BoundedComparator>, ConfigError> {
        let Some(cmp) = &self.comparator else {
            return Ok(None);
        };
        let order = self.field_order()?;
        let upp = cmp
            .abs_diff_upp
            .trim()
            .parse::<BigInt>()
            .map_err(|_| ConfigError::InvalidInteger {
                field: "comparator.abs_diff_upp",
                value: cmp.abs_diff_upp.clone(),
            })?;
        Ok(Some(BoundedComparator::new(
            &order,
            &upp,
            cmp.allow_non_determinism,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GadgetError;

    #[test]
    fn parses_preset_with_comparator() {
        let cfg = GadgetConfig::from_json_str(
            r#"{"field": "goldilocks", "comparator": {"abs_diff_upp": "1000"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.field, FieldPreset::Goldilocks);
        let cmp = cfg.bounded_comparator().unwrap().unwrap();
        assert_eq!(cmp.abs_diff_upp_bit_len(), 10);
    }

    #[test]
    fn parses_custom_field() {
        let cfg = GadgetConfig::from_json_str(
            r#"{"field": {"custom": {"modulus": "13"}},
                "comparator": {"abs_diff_upp": "2", "allow_non_determinism": false}}"#,
        )
        .unwrap();
        assert_eq!(cfg.field_order().unwrap().modulus(), &BigUint::from(13u32));
        assert_eq!(cfg.bounded_comparator().unwrap().unwrap().abs_diff_upp_bit_len(), 2);
    }

    #[test]
    fn comparator_is_optional() {
        let cfg = GadgetConfig::from_json_str(r#"{"field": "bn254"}"#).unwrap();
        assert!(cfg.bounded_comparator().unwrap().is_none());
        assert_eq!(cfg.field_order().unwrap().bits(), 254);
    }

    #[test]
    fn rejects_bad_integers_and_bounds() {
        let cfg = GadgetConfig::from_json_str(
            r#"{"field": {"custom": {"modulus": "thirteen"}}}"#,
        )
        .unwrap();
        assert!(matches!(
            cfg.field_order(),
            Err(ConfigError::InvalidInteger { .. })
        ));

        let cfg = GadgetConfig::from_json_str(
            r#"{"field": "mersenne31", "comparator": {"abs_diff_upp": "-5"}}"#,
        )
        .unwrap();
        assert!(matches!(
            cfg.bounded_comparator(),
            Err(ConfigError::Gadget(GadgetError::AbsDiffUppOutOfRange { .. }))
        ));

        assert!(matches!(
            GadgetConfig::from_json_str("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = GadgetConfig {
            field: FieldPreset::Custom {
                modulus: "101".to_string(),
            },
            comparator: Some(ComparatorConfig {
                abs_diff_upp: "7".to_string(),
                allow_non_determinism: true,
            }),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(GadgetConfig::from_json_str(&json).unwrap(), cfg);
    }
}
