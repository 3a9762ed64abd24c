//! Module descriptors
//!
//! A descriptor is the `(module_name, table_name)` pair that drives generation
//! of one NestJS module. Module names are kebab-case (`call-reports`) and table
//! names are singular `snake_case` (`call_report`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// Modules generated for the CRM backend, in emission order
pub const PRODUCTION_MODULES: &[(&str, &str)] = &[
    ("invoices", "invoice"),
    ("quotes", "quote"),
    ("deals", "deal"),
    ("projects", "project"),
    ("contracts", "contract"),
    ("documents", "document"),
    ("forms", "form"),
    ("tickets", "ticket"),
    ("call-reports", "call_report"),
    ("campaigns", "campaign"),
    ("influencers", "influencer_campaign"),
    ("brand-mentions", "brand_mention"),
    ("social-messages", "social_message"),
    ("territories", "territory"),
    ("agents", "agent"),
    ("reports", "report"),
    ("workflows", "workflow"),
];

/// One `(module_name, table_name)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Kebab-case module name, also the directory and route name
    #[serde(rename = "name")]
    module_name: String,
    /// Singular `snake_case` table name
    #[serde(rename = "table")]
    table_name: String,
}

impl ModuleDescriptor {
    /// Create a descriptor without validating it
    ///
    /// Call [`validate_all`] before generating from a list of descriptors.
    #[must_use]
    pub fn new(module_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            table_name: table_name.into(),
        }
    }

    /// Kebab-case module name
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Singular table name
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Check both names against the accepted grammar
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidModuleName`] or
    /// [`GenerateError::InvalidTableName`] naming the rule that was broken.
    pub fn validate(&self) -> Result<()> {
        check_segments(&self.module_name, '-').map_err(|reason| {
            GenerateError::InvalidModuleName {
                name: self.module_name.clone(),
                reason,
            }
        })?;

        check_segments(&self.table_name, '_').map_err(|reason| {
            GenerateError::InvalidTableName {
                module: self.module_name.clone(),
                name: self.table_name.clone(),
                reason,
            }
        })
    }
}

/// The built-in production descriptor list
#[must_use]
pub fn production() -> Vec<ModuleDescriptor> {
    PRODUCTION_MODULES
        .iter()
        .map(|(module, table)| ModuleDescriptor::new(*module, *table))
        .collect()
}

/// Validate every descriptor and reject duplicate module names
///
/// Stops at the first problem in list order.
///
/// # Errors
///
/// Returns the first grammar violation, or [`GenerateError::DuplicateModule`].
pub fn validate_all(descriptors: &[ModuleDescriptor]) -> Result<()> {
    let mut seen = HashSet::with_capacity(descriptors.len());

    for descriptor in descriptors {
        descriptor.validate()?;

        if !seen.insert(descriptor.module_name()) {
            return Err(GenerateError::DuplicateModule(
                descriptor.module_name().to_string(),
            ));
        }
    }

    Ok(())
}

/// Segments of `[a-z][a-z0-9]*` joined by single `separator` characters
fn check_segments(input: &str, separator: char) -> std::result::Result<(), &'static str> {
    if input.is_empty() {
        return Err("must not be empty");
    }

    for segment in input.split(separator) {
        let mut chars = segment.chars();

        match chars.next() {
            None => return Err("separators must sit between non-empty words"),
            Some(first) if !first.is_ascii_lowercase() => {
                return Err("each word must start with a lowercase ASCII letter");
            }
            Some(_) => {}
        }

        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return Err("only lowercase ASCII letters, digits and the separator are allowed");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_list_is_valid() {
        let modules = production();
        assert_eq!(modules.len(), 17);
        assert!(validate_all(&modules).is_ok());
        assert_eq!(modules[0], ModuleDescriptor::new("invoices", "invoice"));
        assert_eq!(modules[16].module_name(), "workflows");
    }

    #[test]
    fn test_valid_names() {
        for (module, table) in [
            ("invoices", "invoice"),
            ("call-reports", "call_report"),
            ("v2-items", "v2_item"),
            ("a", "b"),
        ] {
            assert!(
                ModuleDescriptor::new(module, table).validate().is_ok(),
                "should accept {module}/{table}"
            );
        }
    }

    #[test]
    fn test_invalid_module_names() {
        for module in [
            "",
            "Invoices",
            "call_reports",
            "call--reports",
            "-invoices",
            "invoices-",
            "2fa-codes",
            "call reports",
        ] {
            let err = ModuleDescriptor::new(module, "invoice").validate().unwrap_err();
            assert!(
                matches!(err, GenerateError::InvalidModuleName { .. }),
                "should reject module '{module}', got {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_table_names() {
        for table in ["", "Invoice", "call-report", "call__report", "_invoice"] {
            let err = ModuleDescriptor::new("invoices", table).validate().unwrap_err();
            assert!(
                matches!(err, GenerateError::InvalidTableName { .. }),
                "should reject table '{table}', got {err:?}"
            );
        }
    }

    #[test]
    fn test_error_names_the_offender() {
        let err = ModuleDescriptor::new("deals", "Deal").validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'Deal'"));
        assert!(message.contains("'deals'"));
    }

    #[test]
    fn test_duplicate_modules_rejected() {
        let modules = vec![
            ModuleDescriptor::new("deals", "deal"),
            ModuleDescriptor::new("quotes", "quote"),
            ModuleDescriptor::new("deals", "other_deal"),
        ];

        let err = validate_all(&modules).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateModule(ref name) if name == "deals"));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_all(&[]).is_ok());
    }
}
