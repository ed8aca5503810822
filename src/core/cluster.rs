//! Cluster records shown on the dashboard

use serde::{Deserialize, Serialize};

/// A detected biosynthetic gene cluster with its prioritization scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
	/// Display identifier, unique within a result set
	pub id: String,
	/// BGC class label (NRPS, PKS, RiPP, Terpene, ...)
	#[serde(rename = "type")]
	pub kind: String,
	/// Novelty score, nominally 0.0-1.0
	pub novelty: f64,
	/// Drug-likeness score, nominally 0.0-1.0
	pub drug_likeness: f64,
}

impl ClusterRecord {
	pub fn new(id: &str, kind: &str, novelty: f64, drug_likeness: f64) -> Self {
		Self {
			id: id.to_string(),
			kind: kind.to_string(),
			novelty,
			drug_likeness,
		}
	}

	/// Whether both scores fall inside [0.0, 1.0]
	pub fn in_unit_range(&self) -> bool {
		(0.0..=1.0).contains(&self.novelty) && (0.0..=1.0).contains(&self.drug_likeness)
	}
}

/// The mock result set displayed regardless of uploaded input.
///
/// Built fresh on every call so renders never share mutable state.
pub fn demo_clusters() -> Vec<ClusterRecord> {
	vec![
		ClusterRecord::new("Cluster 1", "NRPS", 0.85, 0.76),
		ClusterRecord::new("Cluster 2", "PKS", 0.92, 0.89),
		ClusterRecord::new("Cluster 3", "RiPP", 0.40, 0.55),
		ClusterRecord::new("Cluster 4", "Terpene", 0.70, 0.65),
	]
}

/// Exported result set
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterReport {
	/// ai4disco version that produced this
	pub version: String,
	/// When the report was generated
	pub timestamp: String,
	pub total_clusters: usize,
	pub clusters: Vec<ClusterRecord>,
}

impl ClusterReport {
	pub fn new(clusters: Vec<ClusterRecord>) -> Self {
		Self {
			version: env!("CARGO_PKG_VERSION").to_string(),
			timestamp: chrono::Local::now().to_rfc3339(),
			total_clusters: clusters.len(),
			clusters,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn demo_set_is_fixed_and_ordered() {
		let ids: Vec<String> = demo_clusters().into_iter().map(|c| c.id).collect();
		assert_eq!(ids, ["Cluster 1", "Cluster 2", "Cluster 3", "Cluster 4"]);
	}

	#[test]
	fn demo_scores_are_in_unit_range() {
		assert!(demo_clusters().iter().all(ClusterRecord::in_unit_range));
	}

	#[test]
	fn out_of_range_scores_are_reported_not_rejected() {
		let record = ClusterRecord::new("Cluster X", "PKS", 1.4, -0.1);
		assert!(!record.in_unit_range());
		assert_eq!(record.novelty, 1.4);
	}

	#[test]
	fn kind_serializes_as_type() {
		let json = serde_json::to_value(&demo_clusters()[0]).unwrap();
		assert_eq!(json["type"], "NRPS");
		assert_eq!(json["drug_likeness"], 0.76);
		assert!(json.get("kind").is_none());
	}
}
