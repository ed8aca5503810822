//! Dashboard render state

use crate::core::GenomeUpload;

/// Status banner shown once a genome has been accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
	Success,
	Info,
}

impl UploadStatus {
	pub const ALL: [UploadStatus; 2] = [UploadStatus::Success, UploadStatus::Info];

	pub fn message(&self) -> &'static str {
		match self {
			UploadStatus::Success => "Genome uploaded successfully! Running AI pipeline...",
			UploadStatus::Info => "Showing mock results for demo purposes.",
		}
	}

	pub fn css_class(&self) -> &'static str {
		match self {
			UploadStatus::Success => "alert alert-success",
			UploadStatus::Info => "alert alert-info",
		}
	}
}

/// Everything a render pass depends on besides the fixed result set
#[derive(Debug, Clone, Default)]
pub struct PageState {
	upload: Option<GenomeUpload>,
}

impl PageState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_upload(upload: Option<GenomeUpload>) -> Self {
		Self { upload }
	}

	pub fn upload(&self) -> Option<&GenomeUpload> {
		self.upload.as_ref()
	}

	/// Banners to display: both when a genome is present, none otherwise
	pub fn statuses(&self) -> &'static [UploadStatus] {
		if self.upload.is_some() {
			&UploadStatus::ALL
		} else {
			&[]
		}
	}
}
