//! Module generation orchestrator
//!
//! Walks the descriptor list in order and, for each module, renders the
//! module, service and controller files. Writing stops at the first failure:
//! files already written stay on disk and later modules are not generated.

use std::path::PathBuf;

use crate::descriptor::{self, ModuleDescriptor};
use crate::error::Result;
use crate::naming::DerivedNames;
use crate::templates::{ArtifactKind, TemplateRegistry};
use crate::writer::{DirectoryPolicy, FileStatus, FileWriter};

/// NestJS CRUD module generator
pub struct ModuleGenerator {
    /// Validated descriptors, in emission order
    descriptors: Vec<ModuleDescriptor>,
    /// Compiled templates
    templates: TemplateRegistry,
}

impl ModuleGenerator {
    /// Create a generator for a descriptor list
    ///
    /// The whole list is validated up front, so a bad entry fails before
    /// anything is rendered or written.
    ///
    /// # Errors
    ///
    /// Returns the first validation error in list order, or a template
    /// compilation error.
    pub fn new(descriptors: Vec<ModuleDescriptor>) -> Result<Self> {
        descriptor::validate_all(&descriptors)?;

        let templates = TemplateRegistry::new()?;

        Ok(Self {
            descriptors,
            templates,
        })
    }

    /// Descriptors this generator will emit
    #[must_use]
    pub fn descriptors(&self) -> &[ModuleDescriptor] {
        &self.descriptors
    }

    /// Render the three files for one descriptor
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render_module(&self, descriptor: &ModuleDescriptor) -> Result<GeneratedModule> {
        let names = DerivedNames::from_descriptor(descriptor);

        let files = ArtifactKind::ALL
            .into_iter()
            .map(|kind| -> Result<GeneratedFile> {
                let content = self.templates.render(kind, &names)?;
                Ok(GeneratedFile {
                    path: PathBuf::from(&names.module_name).join(kind.file_name(&names.module_name)),
                    content,
                    kind,
                    description: format!("NestJS {kind} for {}", names.class_name),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GeneratedModule { names, files })
    }

    /// Render every module without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns the first rendering error.
    pub fn render_all(&self) -> Result<Vec<GeneratedModule>> {
        self.descriptors
            .iter()
            .map(|descriptor| self.render_module(descriptor))
            .collect()
    }

    /// Render and write every module in order
    ///
    /// `on_module` runs after all three files of a module are written.
    ///
    /// # Errors
    ///
    /// Returns the first rendering, directory or write error. Modules after
    /// the failing one are not generated.
    pub fn generate<P, F>(&self, writer: &FileWriter<P>, mut on_module: F) -> Result<GenerationReport>
    where
        P: DirectoryPolicy,
        F: FnMut(&GeneratedModule),
    {
        let mut report = GenerationReport::default();

        for descriptor in &self.descriptors {
            let module = self.render_module(descriptor)?;

            for file in &module.files {
                report.files.push(writer.write(file)?);
            }

            tracing::info!(module = %module.names.module_name, "generated module");
            report.modules += 1;
            on_module(&module);
        }

        Ok(report)
    }

    /// Compare every rendered file with what is on disk
    ///
    /// # Errors
    ///
    /// Returns a rendering error or a read error other than not-found.
    pub fn check<P: DirectoryPolicy>(&self, writer: &FileWriter<P>) -> Result<Vec<DriftEntry>> {
        let mut entries = Vec::new();

        for module in self.render_all()? {
            for file in module.files {
                let status = writer.compare(&file)?;
                tracing::debug!(path = %file.path.display(), ?status, "compared file");
                entries.push(DriftEntry { file, status });
            }
        }

        Ok(entries)
    }
}

/// The rendered files for one module
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    /// Names used to render the module
    pub names: DerivedNames,
    /// Module, service and controller files, in that order
    pub files: Vec<GeneratedFile>,
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// Which template produced it
    pub kind: ArtifactKind,
    /// File description for user feedback
    pub description: String,
}

/// Summary of a completed generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Modules fully written
    pub modules: usize,
    /// Every path written, in order
    pub files: Vec<PathBuf>,
}

/// One file's drift status
#[derive(Debug, Clone)]
pub struct DriftEntry {
    /// Freshly rendered file
    pub file: GeneratedFile,
    /// Comparison against disk
    pub status: FileStatus,
}
