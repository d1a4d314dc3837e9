//! Budget policy applied by the wizard's budget step.

/// Configuration for the task-posting wizard.
///
/// The defaults accept any positive finite budget, matching the marketplace
/// web client. Hosts that want to enforce currency precision or a ceiling can
/// opt into [`WizardConfig::strict`].
///
/// # Examples
///
/// ```
/// use fixflex::post_task::domain::WizardConfig;
///
/// let config = WizardConfig::default();
/// assert!(config.max_budget.is_none());
///
/// let strict = WizardConfig::strict();
/// assert_eq!(strict.max_decimal_places, Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WizardConfig {
    /// Largest accepted budget, inclusive.
    pub max_budget: Option<f64>,
    /// Largest accepted number of fractional digits in the budget text.
    pub max_decimal_places: Option<u32>,
}

impl WizardConfig {
    /// Creates a configuration with cent precision and a 100 000 ceiling.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_budget: Some(100_000.0),
            max_decimal_places: Some(2),
        }
    }
}
