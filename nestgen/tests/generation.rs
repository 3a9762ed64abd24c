//! Integration tests for module generation

use std::fs;
use std::path::Path;

use nestgen::{
    descriptor, CreateMissing, FileStatus, FileWriter, GenerateError, ModuleDescriptor,
    ModuleGenerator,
};
use tempfile::TempDir;

fn descriptors(pairs: &[(&str, &str)]) -> Vec<ModuleDescriptor> {
    pairs
        .iter()
        .map(|(module, table)| ModuleDescriptor::new(*module, *table))
        .collect()
}

fn module_files(root: &Path, module: &str) -> Vec<std::path::PathBuf> {
    ["module", "service", "controller"]
        .iter()
        .map(|kind| root.join(module).join(format!("{module}.{kind}.ts")))
        .collect()
}

/// Every production module gets exactly three files at fixed paths
#[test]
fn test_production_list_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    let generator = ModuleGenerator::new(descriptor::production()).unwrap();
    let writer = FileWriter::with_policy(&root, CreateMissing);

    let mut completed = Vec::new();
    let report = generator
        .generate(&writer, |module| completed.push(module.names.module_name.clone()))
        .unwrap();

    assert_eq!(report.modules, 17);
    assert_eq!(report.files.len(), 51);
    assert_eq!(completed.first().map(String::as_str), Some("invoices"));
    assert_eq!(completed.last().map(String::as_str), Some("workflows"));

    for (module, _) in descriptor::PRODUCTION_MODULES {
        for path in module_files(&root, module) {
            assert!(path.is_file(), "missing {}", path.display());
        }
        assert_eq!(fs::read_dir(root.join(module)).unwrap().count(), 3);
    }
}

/// Generated output matches the hand-checked brand-mentions module
#[test]
fn test_brand_mentions_matches_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        ModuleGenerator::new(descriptors(&[("brand-mentions", "brand_mention")])).unwrap();
    let writer = FileWriter::with_policy(temp_dir.path(), CreateMissing);

    generator.generate(&writer, |_| {}).unwrap();

    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    for kind in ["module", "service", "controller"] {
        let name = format!("brand-mentions/brand-mentions.{kind}.ts");
        let expected = fs::read_to_string(fixtures.join(&name)).unwrap();
        let actual = fs::read_to_string(temp_dir.path().join(&name)).unwrap();
        assert_eq!(actual, expected, "{name} differs from fixture");
    }
}

/// Invoices service queries the plural table scoped by company
#[test]
fn test_invoices_service() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("invoices")).unwrap();
    let generator = ModuleGenerator::new(descriptors(&[("invoices", "invoice")])).unwrap();

    generator
        .generate(&FileWriter::new(temp_dir.path()), |_| {})
        .unwrap();

    let service =
        fs::read_to_string(temp_dir.path().join("invoices/invoices.service.ts")).unwrap();
    assert!(service.contains(".from('invoices')"));
    assert!(service.contains(".eq('company_id', companyId)"));
    assert!(service.contains(".order('created_at', { ascending: false })"));
    assert!(service.contains("'Invoices deleted successfully'"));
}

/// Two runs over the same list produce byte-identical files
#[test]
fn test_regeneration_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ModuleGenerator::new(descriptor::production()).unwrap();
    let writer = FileWriter::with_policy(temp_dir.path(), CreateMissing);

    let first = generator.generate(&writer, |_| {}).unwrap();
    let snapshot: Vec<Vec<u8>> = first.files.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = generator.generate(&writer, |_| {}).unwrap();
    assert_eq!(first.files, second.files);
    for (path, before) in second.files.iter().zip(&snapshot) {
        assert_eq!(&fs::read(path).unwrap(), before, "{} changed", path.display());
    }
}

/// A missing module directory halts the run at that module
#[test]
fn test_missing_directory_halts_run() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("deals")).unwrap();
    fs::create_dir(root.join("tickets")).unwrap();

    let generator = ModuleGenerator::new(descriptors(&[
        ("deals", "deal"),
        ("quotes", "quote"),
        ("tickets", "ticket"),
    ]))
    .unwrap();

    let mut completed = Vec::new();
    let err = generator
        .generate(&FileWriter::new(root), |module| {
            completed.push(module.names.module_name.clone());
        })
        .unwrap_err();

    match err {
        GenerateError::Write { path, .. } => {
            assert_eq!(path, root.join("quotes/quotes.module.ts"));
        }
        other => panic!("expected write error, got {other:?}"),
    }

    assert_eq!(completed, vec!["deals".to_string()]);
    for path in module_files(root, "deals") {
        assert!(path.is_file());
    }
    assert!(!root.join("quotes").exists());
    assert_eq!(fs::read_dir(root.join("tickets")).unwrap().count(), 0);
}

/// Validation runs before anything is written
#[test]
fn test_invalid_entry_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let result = ModuleGenerator::new(descriptors(&[
        ("deals", "deal"),
        ("quotes", "Quote"),
    ]));

    assert!(matches!(result, Err(GenerateError::InvalidTableName { .. })));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

/// Duplicate module names are rejected
#[test]
fn test_duplicate_module_rejected() {
    let result = ModuleGenerator::new(descriptors(&[("deals", "deal"), ("deals", "deal")]));
    assert!(matches!(result, Err(GenerateError::DuplicateModule(_))));
}

/// Drift check tracks missing, up-to-date and edited files
#[test]
fn test_check_reports_drift() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ModuleGenerator::new(descriptors(&[
        ("call-reports", "call_report"),
        ("agents", "agent"),
    ]))
    .unwrap();
    let writer = FileWriter::with_policy(temp_dir.path(), CreateMissing);

    let before = generator.check(&writer).unwrap();
    assert_eq!(before.len(), 6);
    assert!(before.iter().all(|e| e.status == FileStatus::Missing));

    generator.generate(&writer, |_| {}).unwrap();
    let after = generator.check(&writer).unwrap();
    assert!(after.iter().all(|e| e.status == FileStatus::UpToDate));

    let edited = temp_dir.path().join("agents/agents.service.ts");
    fs::write(&edited, "// hand edited\n").unwrap();

    let stale: Vec<_> = generator
        .check(&writer)
        .unwrap()
        .into_iter()
        .filter(|e| matches!(e.status, FileStatus::Stale { .. }))
        .collect();
    assert_eq!(stale.len(), 1);
    assert_eq!(writer.target(&stale[0].file), edited);
}
