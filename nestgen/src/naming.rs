//! Derived name forms for code generation
//!
//! Every template variable is a pure function of a [`ModuleDescriptor`]. The
//! helpers here compute those forms; [`DerivedNames`] bundles them as the
//! typed rendering context.

use convert_case::{Case, Casing};
use serde::Serialize;

use crate::descriptor::ModuleDescriptor;

/// Naming helpers for NestJS module generation
pub struct NameHelpers;

impl NameHelpers {
    /// Capitalize each hyphen-separated word and concatenate
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestgen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_class_name("brand-mentions"), "BrandMentions");
    /// assert_eq!(NameHelpers::to_class_name("invoices"), "Invoices");
    /// ```
    #[must_use]
    pub fn to_class_name(module_name: &str) -> String {
        module_name.from_case(Case::Kebab).to_case(Case::Pascal)
    }

    /// Plural table name: the singular table name with an `s` appended
    ///
    /// No inflection rules are applied.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestgen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_table_plural("call_report"), "call_reports");
    /// assert_eq!(NameHelpers::to_table_plural("territory"), "territorys");
    /// ```
    #[must_use]
    pub fn to_table_plural(table_name: &str) -> String {
        format!("{table_name}s")
    }

    /// Property name used for the injected service: hyphens removed
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestgen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_property_name("social-messages"), "socialmessages");
    /// ```
    #[must_use]
    pub fn to_property_name(module_name: &str) -> String {
        module_name.replace('-', "")
    }
}

/// Template context for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    /// Kebab-case module name (`call-reports`)
    pub module_name: String,
    /// Class name prefix (`CallReports`)
    pub class_name: String,
    /// Supabase table queried by the service (`call_reports`)
    pub table_plural: String,
    /// Controller property prefix (`callreports`)
    pub property_name: String,
}

impl DerivedNames {
    /// Compute every derived form for a descriptor
    #[must_use]
    pub fn from_descriptor(descriptor: &ModuleDescriptor) -> Self {
        let module_name = descriptor.module_name();

        Self {
            module_name: module_name.to_string(),
            class_name: NameHelpers::to_class_name(module_name),
            table_plural: NameHelpers::to_table_plural(descriptor.table_name()),
            property_name: NameHelpers::to_property_name(module_name),
        }
    }
}
