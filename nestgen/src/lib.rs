//! nestgen library
//!
//! Generates NestJS CRUD modules (module, service and controller files) backed
//! by Supabase tables from a list of `(module_name, table_name)` descriptors.
//!
//! ```no_run
//! use nestgen::{descriptor, FileWriter, ModuleGenerator};
//!
//! # fn main() -> nestgen::Result<()> {
//! let generator = ModuleGenerator::new(descriptor::production())?;
//! let writer = FileWriter::new("src");
//! generator.generate(&writer, |module| println!("Created {} module", module.names.module_name))?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod naming;
pub mod observability;
pub mod templates;
pub mod writer;

pub use config::GeneratorConfig;
pub use descriptor::ModuleDescriptor;
pub use error::{GenerateError, Result};
pub use generator::{DriftEntry, GeneratedFile, GeneratedModule, GenerationReport, ModuleGenerator};
pub use naming::{DerivedNames, NameHelpers};
pub use templates::{ArtifactKind, TemplateRegistry};
pub use writer::{CreateMissing, DirectoryPolicy, FileStatus, FileWriter, RequireExisting};
