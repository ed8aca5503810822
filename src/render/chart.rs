//! Novelty vs drug-likeness scatter chart (SVG)

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::{
	CHART_HEIGHT, CHART_TITLE, CHART_WIDTH, LABEL_FONT_SIZE, LABEL_OFFSET, MARKER_AREA,
	MARKER_COLOR, TICK_STEP, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::core::ClusterRecord;
use crate::render::Theme;

/// Points per inch vs pixels per inch at 100 dpi
const PX_PER_PT: f64 = 100.0 / 72.0;

/// A fixed-range chart axis
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
	pub label: &'static str,
	pub min: f64,
	pub max: f64,
}

impl Axis {
	/// Unit axis [0, 1], independent of the data plotted on it
	pub fn unit(label: &'static str) -> Self {
		Self { label, min: 0.0, max: 1.0 }
	}

	pub fn span(&self) -> f64 {
		self.max - self.min
	}

	pub fn contains(&self, value: f64) -> bool {
		(self.min..=self.max).contains(&value)
	}

	/// Tick positions from min to max inclusive
	pub fn ticks(&self, step: f64) -> Vec<f64> {
		if step.is_nan() || step <= 0.0 || !self.span().is_finite() {
			return Vec::new();
		}
		let count = (self.span() / step).round() as usize;
		(0..=count).map(|i| self.min + i as f64 * step).collect()
	}
}

/// One plotted cluster, in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
	pub label: String,
	pub x: f64,
	pub y: f64,
}

/// Pixel geometry of the chart canvas
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
	pub width: f64,
	pub height: f64,
	pub margin_left: f64,
	pub margin_right: f64,
	pub margin_top: f64,
	pub margin_bottom: f64,
}

impl Default for ChartLayout {
	fn default() -> Self {
		Self {
			width: CHART_WIDTH,
			height: CHART_HEIGHT,
			margin_left: 80.0,
			margin_right: 30.0,
			margin_top: 50.0,
			margin_bottom: 60.0,
		}
	}
}

impl ChartLayout {
	pub fn plot_width(&self) -> f64 {
		self.width - self.margin_left - self.margin_right
	}

	pub fn plot_height(&self) -> f64 {
		self.height - self.margin_top - self.margin_bottom
	}

	pub fn plot_bottom(&self) -> f64 {
		self.margin_top + self.plot_height()
	}

	pub fn x_to_px(&self, axis: &Axis, value: f64) -> f64 {
		self.margin_left + (value - axis.min) / axis.span() * self.plot_width()
	}

	/// SVG y grows downwards, so the axis minimum sits at the plot bottom
	pub fn y_to_px(&self, axis: &Axis, value: f64) -> f64 {
		self.plot_bottom() - (value - axis.min) / axis.span() * self.plot_height()
	}
}

/// Scatter chart of novelty (x) against drug-likeness (y)
#[derive(Debug, Clone)]
pub struct ScatterChart {
	pub title: &'static str,
	pub x_axis: Axis,
	pub y_axis: Axis,
	pub points: Vec<ScatterPoint>,
	pub layout: ChartLayout,
}

impl ScatterChart {
	pub fn from_clusters(clusters: &[ClusterRecord]) -> Self {
		let points = clusters
			.iter()
			.map(|c| ScatterPoint {
				label: c.id.clone(),
				x: c.novelty,
				y: c.drug_likeness,
			})
			.collect();

		Self {
			title: CHART_TITLE,
			x_axis: Axis::unit(X_AXIS_LABEL),
			y_axis: Axis::unit(Y_AXIS_LABEL),
			points,
			layout: ChartLayout::default(),
		}
	}

	/// Marker radius in pixels for the configured marker area
	pub fn marker_radius() -> f64 {
		MARKER_AREA.sqrt() / 2.0 * PX_PER_PT
	}

	/// Points falling outside the fixed axes (clipped when drawn)
	pub fn clipped_points(&self) -> impl Iterator<Item = &ScatterPoint> {
		self.points
			.iter()
			.filter(|p| !self.x_axis.contains(p.x) || !self.y_axis.contains(p.y))
	}

	pub fn to_svg(&self, theme: Theme) -> String {
		let l = &self.layout;
		let plot_right = l.margin_left + l.plot_width();
		let plot_bottom = l.plot_bottom();
		let radius = Self::marker_radius();

		let mut ticks = String::new();
		for tick in self.x_axis.ticks(TICK_STEP) {
			let x = l.x_to_px(&self.x_axis, tick);
			ticks.push_str(&format!(
				r##"<line x1="{x:.1}" y1="{plot_bottom:.1}" x2="{x:.1}" y2="{:.1}" stroke="#333333"/><text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="9pt" fill="#333333">{tick:.1}</text>"##,
				plot_bottom + 5.0,
				plot_bottom + 20.0,
			));
			ticks.push('\n');
		}
		for tick in self.y_axis.ticks(TICK_STEP) {
			let y = l.y_to_px(&self.y_axis, tick);
			ticks.push_str(&format!(
				r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#333333"/><text x="{:.1}" y="{y:.1}" text-anchor="end" dominant-baseline="middle" font-size="9pt" fill="#333333">{tick:.1}</text>"##,
				l.margin_left - 5.0,
				l.margin_left,
				l.margin_left - 8.0,
			));
			ticks.push('\n');
		}

		let mut markers = String::new();
		let mut labels = String::new();
		for point in &self.points {
			let cx = l.x_to_px(&self.x_axis, point.x);
			let cy = l.y_to_px(&self.y_axis, point.y);
			let label_x = l.x_to_px(&self.x_axis, point.x + LABEL_OFFSET);
			let data_label = encode_double_quoted_attribute(&point.label);
			markers.push_str(&format!(
				r##"<circle class="point" data-label="{data_label}" data-x="{}" data-y="{}" cx="{cx:.1}" cy="{cy:.1}" r="{radius:.1}" fill="{MARKER_COLOR}"/>"##,
				point.x,
				point.y,
			));
			markers.push('\n');
			// Unclipped: ids near the right edge must stay whole
			labels.push_str(&format!(
				r##"<text class="point-label" data-label="{data_label}" x="{label_x:.1}" y="{cy:.1}" font-size="{LABEL_FONT_SIZE}pt" fill="#000000">{}</text>"##,
				encode_text(&point.label),
			));
			labels.push('\n');
		}

		let title_size = theme.chart_title_size();
		let label_size = theme.chart_axis_label_size();
		let y_label_x = 20.0;
		let y_label_y = l.margin_top + l.plot_height() / 2.0;

		format!(
			r##"<svg xmlns="http://www.w3.org/2000/svg" class="scatter" width="{width}" height="{height}" viewBox="0 0 {width} {height}" data-x-min="{x_min}" data-x-max="{x_max}" data-y-min="{y_min}" data-y-max="{y_max}">
<defs><clipPath id="plot-area"><rect x="{left}" y="{top}" width="{plot_w}" height="{plot_h}"/></clipPath></defs>
<rect width="100%" height="100%" fill="#ffffff"/>
<text x="{title_x:.1}" y="{title_y:.1}" text-anchor="middle" font-size="{title_size}pt">{title}</text>
<rect x="{left}" y="{top}" width="{plot_w}" height="{plot_h}" fill="none" stroke="#333333"/>
{ticks}<g class="markers" clip-path="url(#plot-area)">
{markers}</g>
<g class="labels">
{labels}</g>
<text x="{x_label_x:.1}" y="{x_label_y:.1}" text-anchor="middle" font-size="{label_size}pt">{x_label}</text>
<text x="{y_label_x:.1}" y="{y_label_y:.1}" text-anchor="middle" font-size="{label_size}pt" transform="rotate(-90, {y_label_x:.1}, {y_label_y:.1})">{y_label}</text>
</svg>"##,
			width = l.width,
			height = l.height,
			x_min = self.x_axis.min,
			x_max = self.x_axis.max,
			y_min = self.y_axis.min,
			y_max = self.y_axis.max,
			left = l.margin_left,
			top = l.margin_top,
			plot_w = l.plot_width(),
			plot_h = l.plot_height(),
			title_x = l.margin_left + l.plot_width() / 2.0,
			title_y = l.margin_top - 15.0,
			title = encode_text(self.title),
			x_label_x = (l.margin_left + plot_right) / 2.0,
			x_label_y = l.height - 15.0,
			x_label = encode_text(self.x_axis.label),
			y_label = encode_text(self.y_axis.label),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::demo_clusters;

	#[test]
	fn points_follow_record_scores() {
		let chart = ScatterChart::from_clusters(&demo_clusters());
		let cluster_2 = chart.points.iter().find(|p| p.label == "Cluster 2").unwrap();
		assert!((cluster_2.x - 0.92).abs() < 1e-9);
		assert!((cluster_2.y - 0.89).abs() < 1e-9);
	}

	#[test]
	fn axes_stay_fixed_for_out_of_range_data() {
		let clusters = vec![ClusterRecord::new("Outlier", "PKS", 1.7, -0.3)];
		let chart = ScatterChart::from_clusters(&clusters);
		assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
		assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
		assert_eq!(chart.clipped_points().count(), 1);
	}

	#[test]
	fn layout_maps_unit_corners_to_plot_area() {
		let layout = ChartLayout::default();
		let axis = Axis::unit("x");
		assert_eq!(layout.x_to_px(&axis, 0.0), 80.0);
		assert_eq!(layout.x_to_px(&axis, 1.0), 770.0);
		assert_eq!(layout.y_to_px(&axis, 0.0), 440.0);
		assert_eq!(layout.y_to_px(&axis, 1.0), 50.0);
	}

	#[test]
	fn labels_are_drawn_outside_clip_group() {
		let svg = ScatterChart::from_clusters(&demo_clusters()).to_svg(Theme::Classic);
		let clip_start = svg.find(r#"clip-path="url(#plot-area)""#).unwrap();
		let clip_end = clip_start + svg[clip_start..].find("</g>").unwrap();
		let clipped = &svg[clip_start..clip_end];

		assert_eq!(clipped.matches("<circle").count(), 4);
		assert!(!clipped.contains("<text"));
		assert!(svg[clip_end..].contains(r#"data-label="Cluster 2" x="721.7""#));
		assert_eq!(svg[clip_end..].matches("class=\"point-label\"").count(), 4);
	}

	#[test]
	fn ticks_empty_for_non_positive_step() {
		let axis = Axis::unit("x");
		assert!(axis.ticks(0.0).is_empty());
		assert!(axis.ticks(-0.2).is_empty());
		assert!(axis.ticks(f64::NAN).is_empty());
	}

	#[test]
	fn ticks_cover_unit_range() {
		let ticks = Axis::unit("x").ticks(0.2);
		assert_eq!(ticks.len(), 6);
		assert!((ticks[5] - 1.0).abs() < 1e-9);
	}

	#[test]
	fn svg_carries_labels_and_titles() {
		let svg = ScatterChart::from_clusters(&demo_clusters()).to_svg(Theme::Classic);
		assert!(svg.starts_with("<svg"));
		assert!(svg.contains(">Cluster Prioritization</text>"));
		assert!(svg.contains(">Novelty Score</text>"));
		assert!(svg.contains(">Drug-likeness Score</text>"));
		assert!(svg.contains(r#"data-label="Cluster 2" data-x="0.92" data-y="0.89""#));
		assert_eq!(svg.matches("<circle").count(), 4);
	}
}
