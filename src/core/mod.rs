//! Core domain types

pub mod cluster;
pub mod state;
pub mod upload;

pub use cluster::{demo_clusters, ClusterRecord, ClusterReport};
pub use state::{PageState, UploadStatus};
pub use upload::{GenomeFormat, GenomeUpload};
