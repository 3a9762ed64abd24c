//! NestJS template rendering
//!
//! Each artifact kind has one handlebars template. Rendering takes the typed
//! [`DerivedNames`] context and returns the file text; it never touches the
//! filesystem.

use std::fmt;

use handlebars::Handlebars;

use crate::error::{GenerateError, Result};
use crate::naming::DerivedNames;

pub mod files;
pub use files::*;

/// The three files generated per module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `@Module` wiring
    Module,
    /// Supabase data access
    Service,
    /// HTTP endpoints
    Controller,
}

impl ArtifactKind {
    /// Every kind, in emission order
    pub const ALL: [Self; 3] = [Self::Module, Self::Service, Self::Controller];

    /// File suffix and template name (`module`, `service`, `controller`)
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Service => "service",
            Self::Controller => "controller",
        }
    }

    /// Template source for this kind
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Module => MODULE_TS,
            Self::Service => SERVICE_TS,
            Self::Controller => CONTROLLER_TS,
        }
    }

    /// File name for a module, e.g. `call-reports.service.ts`
    #[must_use]
    pub fn file_name(self, module_name: &str) -> String {
        format!("{module_name}.{}.ts", self.suffix())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Compiled templates for every artifact kind
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile the built-in templates
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TemplateSyntax`] if a template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generated TypeScript, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for kind in ArtifactKind::ALL {
            handlebars
                .register_template_string(kind.suffix(), kind.source())
                .map_err(|source| GenerateError::TemplateSyntax {
                    kind,
                    source: Box::new(source),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Render one artifact
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if rendering fails.
    pub fn render(&self, kind: ArtifactKind, names: &DerivedNames) -> Result<String> {
        tracing::debug!(module = %names.module_name, %kind, "rendering template");

        self.handlebars
            .render(kind.suffix(), names)
            .map_err(|source| GenerateError::Template {
                kind,
                source: Box::new(source),
            })
    }

    /// Render the `@Module` file
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if rendering fails.
    pub fn render_module(&self, names: &DerivedNames) -> Result<String> {
        self.render(ArtifactKind::Module, names)
    }

    /// Render the service file
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if rendering fails.
    pub fn render_service(&self, names: &DerivedNames) -> Result<String> {
        self.render(ArtifactKind::Service, names)
    }

    /// Render the controller file
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Template`] if rendering fails.
    pub fn render_controller(&self, names: &DerivedNames) -> Result<String> {
        self.render(ArtifactKind::Controller, names)
    }
}
