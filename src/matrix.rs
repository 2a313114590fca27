//! Docker build-matrix expansion for goreleaser configs.
//!
//! A compact per-architecture matrix is expanded into the repeated `dockers`
//! and `docker_manifests` blocks a goreleaser pipeline requires. Blocks are
//! generated as independent copies; no YAML anchors or aliases are emitted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};

/// Compact per-architecture build matrix.
///
/// The defaults reproduce a conventional four-target linux matrix (amd64,
/// arm64v8, armv7, armv6); projects override it through the `[matrix]`
/// table of `gitrelease.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildMatrix {
    #[serde(default)]
    pub common: CommonBlock,

    #[serde(default = "default_targets")]
    pub targets: Vec<ArchTarget>,

    #[serde(default)]
    pub manifests: ManifestNames,
}

impl Default for BuildMatrix {
    fn default() -> Self {
        BuildMatrix {
            common: CommonBlock::default(),
            targets: default_targets(),
            manifests: ManifestNames::default(),
        }
    }
}

/// Fields shared by every generated docker block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonBlock {
    #[serde(default = "default_build_flag_templates")]
    pub build_flag_templates: Vec<String>,

    #[serde(default = "default_builder", rename = "use")]
    pub builder: String,

    #[serde(default)]
    pub extra_files: Vec<String>,
}

impl Default for CommonBlock {
    fn default() -> Self {
        CommonBlock {
            build_flag_templates: default_build_flag_templates(),
            builder: default_builder(),
            extra_files: Vec::new(),
        }
    }
}

/// One architecture entry of the matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchTarget {
    pub goarch: String,

    /// Target OS, `linux` when omitted
    #[serde(default)]
    pub goos: Option<String>,

    /// Docker platform string, e.g. `linux/arm/v7`
    pub platform: String,

    /// Architecture suffix appended to image tags, e.g. `armv7`
    pub arch_tag: String,

    /// ARM variant, only meaningful for `goarch = "arm"`
    #[serde(default)]
    pub goarm: Option<u32>,
}

/// Repository and tag names the manifests are assembled from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestNames {
    #[serde(default = "default_repository")]
    pub repository: String,

    #[serde(default = "default_version_tag")]
    pub version_tag: String,

    #[serde(default = "default_latest_tag")]
    pub latest_tag: String,
}

impl Default for ManifestNames {
    fn default() -> Self {
        ManifestNames {
            repository: default_repository(),
            version_tag: default_version_tag(),
            latest_tag: default_latest_tag(),
        }
    }
}

fn default_build_flag_templates() -> Vec<String> {
    vec![
        "--label=org.opencontainers.image.source={{.GitURL}}".to_string(),
        "--label=org.opencontainers.image.created={{.Date}}".to_string(),
        "--label=org.opencontainers.image.title={{.ProjectName}}".to_string(),
        "--label=org.opencontainers.image.revision={{.FullCommit}}".to_string(),
        "--label=org.opencontainers.image.version={{.Version}}".to_string(),
    ]
}

fn default_builder() -> String {
    "buildx".to_string()
}

fn default_repository() -> String {
    "ghcr.io/{{ .ProjectName }}".to_string()
}

fn default_version_tag() -> String {
    "{{ .Version }}".to_string()
}

fn default_latest_tag() -> String {
    "latest".to_string()
}

fn default_targets() -> Vec<ArchTarget> {
    vec![
        ArchTarget {
            goarch: "amd64".to_string(),
            goos: None,
            platform: "linux/amd64".to_string(),
            arch_tag: "amd64".to_string(),
            goarm: None,
        },
        ArchTarget {
            goarch: "arm64".to_string(),
            goos: None,
            platform: "linux/arm64/v8".to_string(),
            arch_tag: "arm64v8".to_string(),
            goarm: None,
        },
        ArchTarget {
            goarch: "arm".to_string(),
            goos: None,
            platform: "linux/arm/v7".to_string(),
            arch_tag: "armv7".to_string(),
            goarm: Some(7),
        },
        ArchTarget {
            goarch: "arm".to_string(),
            goos: None,
            platform: "linux/arm/v6".to_string(),
            arch_tag: "armv6".to_string(),
            goarm: Some(6),
        },
    ]
}

/// Generated `dockers` entry for one architecture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockerBlock {
    pub build_flag_templates: Vec<String>,

    #[serde(rename = "use")]
    pub builder: String,

    pub extra_files: Vec<String>,
    pub goos: String,
    pub goarch: String,
    /// Serialized as an explicit null for non-ARM targets
    pub goarm: Option<u32>,
    pub image_templates: Vec<String>,
}

/// Generated `docker_manifests` entry for one manifest tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestBlock {
    pub name_template: String,
    pub image_templates: Vec<String>,
}

/// Join a repository and tag parts into an image template
fn image_tag(repository: &str, tag_parts: &[&str]) -> String {
    format!("{}:{}", repository, tag_parts.join("-"))
}

/// Expand the matrix into one docker block per architecture target.
///
/// Each block carries the common fields, the shared build flags plus a
/// per-target `--platform` flag, and one image template per manifest tag.
pub fn expand_dockers(matrix: &BuildMatrix) -> Vec<DockerBlock> {
    let manifests = &matrix.manifests;
    let manifest_tags = [manifests.version_tag.as_str(), manifests.latest_tag.as_str()];

    matrix
        .targets
        .iter()
        .map(|target| {
            let mut build_flag_templates = matrix.common.build_flag_templates.clone();
            build_flag_templates.push(format!("--platform={}", target.platform));

            DockerBlock {
                build_flag_templates,
                builder: matrix.common.builder.clone(),
                extra_files: matrix.common.extra_files.clone(),
                goos: target.goos.clone().unwrap_or_else(|| "linux".to_string()),
                goarch: target.goarch.clone(),
                goarm: target.goarm,
                image_templates: manifest_tags
                    .iter()
                    .map(|&tag| image_tag(&manifests.repository, &[tag, target.arch_tag.as_str()]))
                    .collect(),
            }
        })
        .collect()
}

/// Expand the matrix into one manifest block per manifest tag.
///
/// Each manifest lists every architecture variant of its tag.
pub fn expand_manifests(matrix: &BuildMatrix) -> Vec<ManifestBlock> {
    let manifests = &matrix.manifests;

    [manifests.version_tag.as_str(), manifests.latest_tag.as_str()]
        .iter()
        .map(|&tag| ManifestBlock {
            name_template: format!("{}:{}", manifests.repository, tag),
            image_templates: matrix
                .targets
                .iter()
                .map(|target| image_tag(&manifests.repository, &[tag, target.arch_tag.as_str()]))
                .collect(),
        })
        .collect()
}

/// Replace the `dockers` and `docker_manifests` sections of a parsed
/// goreleaser document with freshly expanded blocks. All other keys pass
/// through untouched.
pub fn transform_document(doc: &mut serde_yaml::Value, matrix: &BuildMatrix) -> Result<()> {
    let mapping = doc
        .as_mapping_mut()
        .ok_or_else(|| ReleaseError::config("goreleaser document is not a YAML mapping"))?;

    mapping.insert(
        serde_yaml::Value::from("dockers"),
        serde_yaml::to_value(expand_dockers(matrix))?,
    );
    mapping.insert(
        serde_yaml::Value::from("docker_manifests"),
        serde_yaml::to_value(expand_manifests(matrix))?,
    );

    Ok(())
}

/// Load a goreleaser file, regenerate its docker sections, and write it back
pub fn apply_to_file<P: AsRef<Path>>(path: P, matrix: &BuildMatrix) -> Result<()> {
    let text = fs::read_to_string(&path)?;
    let mut doc: serde_yaml::Value = serde_yaml::from_str(&text)?;

    transform_document(&mut doc, matrix)?;

    fs::write(&path, serde_yaml::to_string(&doc)?)?;
    Ok(())
}
