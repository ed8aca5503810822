//! Static narrative copy for the dashboard

pub const HERO_PROBLEM: &str =
	"The world is running out of effective antibiotics and anticancer drugs.";
pub const HERO_SOLUTION: &str = "Our platform uses AI to scan microbial genomes, detect biosynthetic gene clusters (BGCs), and prioritize top candidates for new drugs.";

pub const UPLOAD_HEADER: &str = "Upload Genome (Demo)";
pub const UPLOAD_LABEL: &str = "Upload microbial genome (FASTA/GenBank)";
pub const RESULTS_HEADER: &str = "Detected Biosynthetic Gene Clusters (BGCs)";
pub const CHART_HEADER: &str = "Novelty vs Drug-likeness";
pub const PIPELINE_HEADER: &str = "How It Works";
pub const IMPACT_HEADER: &str = "🌍 Partnerships & Impact";

/// (step name, description)
pub const PIPELINE_STEPS: [(&str, &str); 5] = [
	("Genome Scanning", "Upload microbial genomes."),
	("BGC Detection", "AntiSMASH detects biosynthetic gene clusters."),
	(
		"Clustering & Analysis",
		"BiG-SCAPE groups similar clusters and calculates novelty.",
	),
	(
		"AI Prioritization",
		"Machine learning ranks top candidates based on novelty and drug potential.",
	),
	(
		"Result Dashboard",
		"View top clusters, novelty score, and drug-likeness for each BGC.",
	),
];

/// (lead-in, emphasized remainder)
pub const IMPACT_POINTS: [(&str, &str); 4] = [
	(
		"Collaborate with",
		"pharma, biotech startups, and government research institutes",
	),
	("Accelerate", "drug discovery from natural products"),
	("Reduce", "R&D costs and failure rates"),
	("Focus research on", "high-priority, novel biosynthetic clusters"),
];

pub const FOOTER_ICON: &str = "💡";
pub const FOOTER_NOTE: &str = "This is a demo prototype for the Smart India Hackathon. In the full version, antiSMASH and BiG-SCAPE run in the backend, and AI ranks clusters in real-time.";
