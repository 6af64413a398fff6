//! Batch orchestration: enumerate assets, normalize, generate, write.
//!
//! Assets are processed sequentially in filename order so repeated builds
//! are byte-identical. A failing asset is recorded and skipped; duplicate
//! lookup keys and an empty input directory abort the batch before any
//! artifact is written.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::generate;
use crate::identifier::IconIdentifier;
use crate::normalize::{normalize, NormalizeError, NormalizedIcon};
use crate::registry::{self, BuildManifest};

/// Filename of the JSON build report.
pub const MANIFEST_FILE: &str = "icon-manifest.json";

/// Directory layout for one pipeline run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory of raw `*.svg` assets.
    pub input_dir: PathBuf,
    /// Output directory for normalized `*.svg` files; cleared each run.
    pub normalized_dir: PathBuf,
    /// Output directory for generated component and registry sources.
    pub components_dir: PathBuf,
}

impl BuildConfig {
    /// Standard layout relative to the workspace root.
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            input_dir: root.join("assets/svg"),
            normalized_dir: root.join("assets/svg-normalized"),
            components_dir: root.join("crates/growthplan/src/icons"),
        }
    }
}

/// One asset that failed normalization.
#[derive(Debug)]
pub struct AssetFailure {
    /// Source filename.
    pub file: String,
    /// Why it failed.
    pub error: NormalizeError,
}

/// Outcome of a pipeline run.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Assets normalized (and, for a full build, generated) successfully.
    pub generated: usize,
    /// Assets skipped after a normalization failure.
    pub failures: Vec<AssetFailure>,
}

/// Runs only the normalizer, refreshing the normalized asset directory.
pub fn run_normalize(config: &BuildConfig) -> Result<BuildSummary, PipelineError> {
    let (normalized, failures) = normalize_assets(config)?;
    info!(
        normalized = normalized.len(),
        failed = failures.len(),
        "normalization pass complete"
    );
    Ok(BuildSummary {
        generated: normalized.len(),
        failures,
    })
}

/// Runs the full build: normalize, generate components, write registry
/// artifacts and the build manifest.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary, PipelineError> {
    let (normalized, failures) = normalize_assets(config)?;

    let entries: Vec<(String, IconIdentifier)> = normalized
        .iter()
        .map(|(file, id, _)| (file.clone(), id.clone()))
        .collect();
    let artifacts = registry::build(&entries)?;

    clear_generated_sources(&config.components_dir)?;
    for (_, id, icon) in &normalized {
        let path = config
            .components_dir
            .join(format!("{}.rs", id.module_name()));
        write_file(&path, &generate::component_source(icon, id))?;
        debug!(key = %id.key, "generated component");
    }
    write_file(&config.components_dir.join("mod.rs"), &artifacts.modules)?;
    write_file(&config.components_dir.join("mapping.rs"), &artifacts.mapping)?;
    write_file(
        &config.components_dir.join("categories.rs"),
        &artifacts.categories,
    )?;

    let ids: Vec<&IconIdentifier> = normalized.iter().map(|(_, id, _)| id).collect();
    let manifest = BuildManifest::new(&ids, failures.len());
    write_file(
        &config.components_dir.join(MANIFEST_FILE),
        &manifest.to_json(),
    )?;

    info!(
        generated = normalized.len(),
        failed = failures.len(),
        "icon build complete"
    );
    Ok(BuildSummary {
        generated: normalized.len(),
        failures,
    })
}

type NormalizedAsset = (String, IconIdentifier, NormalizedIcon);

/// Shared normalization pass: reads every asset in memory, verifies key
/// uniqueness, then writes the normalized documents.
///
/// Colliding keys would also collide on the normalized `{key}.svg` output
/// path, so the uniqueness check runs before the first write.
fn normalize_assets(
    config: &BuildConfig,
) -> Result<(Vec<NormalizedAsset>, Vec<AssetFailure>), PipelineError> {
    let assets = list_assets(&config.input_dir)?;

    let mut normalized = Vec::with_capacity(assets.len());
    let mut failures = Vec::new();
    for path in assets {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        match read_and_normalize(&path) {
            Ok(icon) => normalized.push((file, IconIdentifier::from_stem(&stem), icon)),
            Err(error) => {
                warn!(%file, %error, "skipping asset");
                failures.push(AssetFailure { file, error });
            }
        }
    }

    let entries: Vec<(String, IconIdentifier)> = normalized
        .iter()
        .map(|(file, id, _)| (file.clone(), id.clone()))
        .collect();
    registry::check_unique(&entries)?;

    clear_normalized_dir(&config.normalized_dir)?;
    for (_, id, icon) in &normalized {
        let out = config.normalized_dir.join(format!("{}.svg", id.key));
        let mut document = icon.to_svg();
        document.push('\n');
        write_file(&out, &document)?;
    }
    Ok((normalized, failures))
}

fn read_and_normalize(path: &Path) -> Result<NormalizedIcon, NormalizeError> {
    let raw = fs::read_to_string(path)?;
    normalize(&raw)
}

/// Collects `*.svg` files sorted by filename; empty input is fatal.
fn list_assets(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = fs::read_dir(dir).map_err(|err| PipelineError::io(dir, err))?;
    let mut assets: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "svg"))
        .collect();
    assets.sort_by_key(|path| path.file_name().map(std::ffi::OsStr::to_os_string));
    if assets.is_empty() {
        return Err(PipelineError::EmptyInput(dir.to_path_buf()));
    }
    Ok(assets)
}

/// Clears previous normalized output, keeping the directory itself.
fn clear_normalized_dir(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir).map_err(|err| PipelineError::io(dir, err))?;
    remove_matching(dir, "svg")
}

/// Clears previously generated sources so removed icons do not linger.
fn clear_generated_sources(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir).map_err(|err| PipelineError::io(dir, err))?;
    remove_matching(dir, "rs")?;
    remove_matching(dir, "json")
}

fn remove_matching(dir: &Path, extension: &str) -> Result<(), PipelineError> {
    let entries = fs::read_dir(dir).map_err(|err| PipelineError::io(dir, err))?;
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == extension) {
            fs::remove_file(&path).map_err(|err| PipelineError::io(&path, err))?;
        }
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), PipelineError> {
    fs::write(path, contents).map_err(|err| PipelineError::io(path, err))
}
