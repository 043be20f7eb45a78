//! Artifact resolution and payload conversion.
//!
//! Resolution applies the report's bucket defaults and fixes the storage key
//! before any I/O happens, so conversion and upload agree on one target.
//! Conversion reads the local source file and produces the bytes that go to
//! storage; transcoding and recompression also write those bytes to a
//! sibling file so a dry run leaves an inspectable copy behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use prost::Message;
use serde::Deserialize;
use uplink_core::{Artifact, BucketConfiguration, Conversion};
use uplink_proto::v1::{ArtifactCompression, ArtifactFormat, SeriesChunk, SeriesPoint};

use crate::error::{ArtifactError, ArtifactResult};

/// An artifact with bucket defaults applied and its storage target fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub bucket: String,
    pub prefix: String,
    /// Object key relative to `prefix`.
    pub key: String,
    /// File the upload reads. For converting directives this is the sibling
    /// file the conversion writes, not the original source.
    pub local_path: PathBuf,
    pub format: ArtifactFormat,
    pub compression: ArtifactCompression,
}

impl ResolvedArtifact {
    /// Full object key, prefix included.
    pub fn storage_key(&self) -> String {
        if self.prefix.is_empty() {
            self.key.clone()
        } else {
            format!("{}/{}", self.prefix.trim_end_matches('/'), self.key)
        }
    }
}

/// One decoded sample from a JSON or YAML source stream.
#[derive(Debug, Deserialize)]
struct RawPoint {
    time: DateTime<Utc>,
    #[serde(default)]
    values: BTreeMap<String, f64>,
}

/// Applies the report's bucket configuration to one artifact and derives
/// its storage key and output format.
///
/// An empty artifact bucket or prefix inherits the report's value. An empty
/// path derives the key from the (converted) file name: gzip appends `.gz`,
/// transcoding swaps the extension for `.series`. An explicitly set path is
/// used verbatim.
pub fn resolve(
    artifact: &Artifact,
    defaults: &BucketConfiguration,
) -> ArtifactResult<ResolvedArtifact> {
    let bucket = if artifact.bucket.is_empty() {
        defaults.name.clone()
    } else {
        artifact.bucket.clone()
    };
    if bucket.is_empty() {
        return Err(ArtifactError::MissingBucket {
            file: artifact.local_file.display().to_string(),
        });
    }

    let prefix = if artifact.prefix.is_empty() {
        defaults.prefix.clone()
    } else {
        artifact.prefix.clone()
    };

    let file_name = artifact
        .local_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ArtifactError::MissingKey {
            file: artifact.local_file.display().to_string(),
        })?;

    let converted_name = match artifact.conversion {
        Conversion::None => file_name,
        Conversion::Gzip => format!("{file_name}.gz"),
        Conversion::JsonToSeries | Conversion::YamlToSeries => match file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => format!("{stem}.series"),
            _ => format!("{file_name}.series"),
        },
    };

    let (format, compression) = match artifact.conversion {
        Conversion::None => (ArtifactFormat::Raw, ArtifactCompression::None),
        Conversion::Gzip => (ArtifactFormat::Raw, ArtifactCompression::Gzip),
        Conversion::JsonToSeries | Conversion::YamlToSeries => {
            (ArtifactFormat::Series, ArtifactCompression::None)
        }
    };

    let key = if artifact.path.is_empty() {
        converted_name.clone()
    } else {
        artifact.path.clone()
    };

    Ok(ResolvedArtifact {
        bucket,
        prefix,
        key,
        local_path: artifact.local_file.with_file_name(converted_name),
        format,
        compression,
    })
}

/// Converts one artifact payload per its directive and returns the bytes to
/// upload.
///
/// Transcoding and recompression write the converted payload to
/// `resolved.local_path` before returning; a no-op directive reads the
/// source as-is and writes nothing.
pub fn convert_artifact(
    artifact: &Artifact,
    resolved: &ResolvedArtifact,
) -> ArtifactResult<Vec<u8>> {
    let source = &artifact.local_file;
    match artifact.conversion {
        Conversion::None => read_source(source),
        Conversion::Gzip => {
            let raw = read_source(source)?;
            let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(&raw).map_err(|e| ArtifactError::Io {
                message: format!("gzip encoding {}: {}", source.display(), e),
            })?;
            let bytes = encoder.finish().map_err(|e| ArtifactError::Io {
                message: format!("gzip encoding {}: {}", source.display(), e),
            })?;
            write_converted(&resolved.local_path, &bytes)?;
            Ok(bytes)
        }
        Conversion::JsonToSeries => {
            let raw = read_source(source)?;
            let points: Vec<RawPoint> =
                serde_json::from_slice(&raw).map_err(|e| ArtifactError::Decode {
                    path: source.display().to_string(),
                    message: e.to_string(),
                })?;
            let bytes = pack_series(points);
            write_converted(&resolved.local_path, &bytes)?;
            Ok(bytes)
        }
        Conversion::YamlToSeries => {
            let raw = read_source(source)?;
            let points: Vec<RawPoint> =
                serde_yaml::from_slice(&raw).map_err(|e| ArtifactError::Decode {
                    path: source.display().to_string(),
                    message: e.to_string(),
                })?;
            let bytes = pack_series(points);
            write_converted(&resolved.local_path, &bytes)?;
            Ok(bytes)
        }
    }
}

fn pack_series(points: Vec<RawPoint>) -> Vec<u8> {
    let chunk = SeriesChunk {
        points: points
            .into_iter()
            .map(|point| SeriesPoint {
                time: Some(uplink_proto::time::from_datetime(point.time)),
                values: point.values.into_iter().collect(),
            })
            .collect(),
    };
    chunk.encode_length_delimited_to_vec()
}

fn read_source(path: &Path) -> ArtifactResult<Vec<u8>> {
    fs::read(path).map_err(|e| ArtifactError::Source {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_converted(path: &Path, bytes: &[u8]) -> ArtifactResult<()> {
    fs::write(path, bytes).map_err(|e| ArtifactError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
