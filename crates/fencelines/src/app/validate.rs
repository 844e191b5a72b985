//! Validation stage: turning the raw `show_lines` option into a parsed
//! range set before the host's generic validation runs.

use std::collections::BTreeSet;

use crate::domain::model::{Attrs, Inputs, Options};
use crate::domain::ranges::LinesRanges;

/// Option key carrying the raw line-selection expression.
pub const SHOW_LINES: &str = "show_lines";

/// Destination for user-facing diagnostics about malformed options.
///
/// Which channel this maps to is the host's concern; the stages only
/// ever receive a sink.
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// The host's generic option validator, invoked after `show_lines` has
/// been handled and removed from the raw inputs.
pub trait Validate {
    fn validate(
        &self,
        language: &str,
        inputs: &Inputs,
        options: &Options,
        attrs: &Attrs,
    ) -> bool;
}

/// Handle the `show_lines` option, then defer to the generic validator.
///
/// When the key is present it is always removed from `inputs` (the
/// handled-option contract: downstream validation must not see it).
/// Every malformed item produces exactly one warning, in item order;
/// the surviving items still take effect. Malformed syntax never fails
/// the fence here — the verdict is whatever `validator` returns for the
/// remaining inputs.
pub fn do_validate(
    language: &str,
    inputs: &mut Inputs,
    options: &mut Options,
    attrs: &Attrs,
    warnings: &dyn WarningSink,
    validator: &dyn Validate,
) -> bool {
    if let Some(raw) = inputs.remove(SHOW_LINES) {
        let (ranges, errors) = LinesRanges::parse(&raw);
        for error in &errors {
            warnings.warn(&format!(
                "Invalid `{SHOW_LINES}` option in {raw:?}, some lines will not be filtered: {error}"
            ));
        }
        if let Some(ranges) = ranges {
            options.show_lines = Some(ranges);
        }
    }
    validator.validate(language, inputs, options, attrs)
}

/// Default generic validator: a fence validates only when every
/// remaining raw option key is on the allowlist.
#[derive(Debug, Clone, Default)]
pub struct BaseValidator {
    allowed: BTreeSet<String>,
}

impl BaseValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permit an additional raw option key.
    pub fn allow(mut self, key: impl Into<String>) -> Self {
        self.allowed.insert(key.into());
        self
    }
}

impl Validate for BaseValidator {
    fn validate(
        &self,
        _language: &str,
        inputs: &Inputs,
        _options: &Options,
        _attrs: &Attrs,
    ) -> bool {
        inputs.keys().all(|key| self.allowed.contains(key))
    }
}
