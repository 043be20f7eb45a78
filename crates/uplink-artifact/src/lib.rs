//! Artifact conversion and object-storage upload for performance reports.
//!
//! Artifacts travel through three steps: [`resolve`] fixes the storage
//! target from the artifact and the report's bucket defaults,
//! [`convert_artifact`] produces the payload bytes per the conversion
//! directive, and an [`ArtifactStore`] puts them under the resolved key.
//! [`upload_report_artifacts`] drives all three over a whole report.

pub mod convert;
pub mod error;
pub mod store;
pub mod upload;

pub use convert::{convert_artifact, resolve, ResolvedArtifact};
pub use error::{ArtifactError, ArtifactResult};
pub use store::{ArtifactStore, AwsCredentials, ObjectArtifactStore};
pub use upload::upload_report_artifacts;
