use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreConfig {
    pub policy_terms: PolicyTermsConfig,
}

/// Standard coverage terms offered at purchase time. All amounts in USDC.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyTermsConfig {
    pub coverage_amount: u64,
    pub premium: u64,
    /// Minimum delay a claim must assert.
    pub delay_threshold_hours: u32,
    /// Window after departure during which a policy still displays as
    /// active.
    pub expiry_grace_hours: u32,
}

impl Default for PolicyTermsConfig {
    fn default() -> Self {
        Self {
            coverage_amount: 500,
            premium: 50,
            delay_threshold_hours: 2,
            expiry_grace_hours: 24,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults_match_standard_terms() {
        let config = CoreConfig::default();

        assert_eq!(500, config.policy_terms.coverage_amount);
        assert_eq!(50, config.policy_terms.premium);
        assert_eq!(2, config.policy_terms.delay_threshold_hours);
        assert_eq!(24, config.policy_terms.expiry_grace_hours);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let config: CoreConfig = serde_json::from_value(json!({
            "policyTerms": {
                "coverageAmount": 1000,
                "premium": 80,
            }
        }))
        .unwrap();

        assert_eq!(1000, config.policy_terms.coverage_amount);
        assert_eq!(80, config.policy_terms.premium);
        assert_eq!(2, config.policy_terms.delay_threshold_hours);
        assert_eq!(24, config.policy_terms.expiry_grace_hours);
    }
}
