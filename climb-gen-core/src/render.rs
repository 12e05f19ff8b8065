//! SVG rendering of a route.
//!
//! Board coordinates are mapped linearly onto the board photo: x in
//! [-64, 64] spans the width between the side guides and y in [4, 140] spans
//! the height, inverted so the top of the wall is at the top of the image.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::model::hold::{Hold, Role};
use crate::model::route::Route;

const BOARD_MIN_X: f64 = -64.0;
const BOARD_MAX_X: f64 = 64.0;
const BOARD_MIN_Y: f64 = 4.0;
const BOARD_MAX_Y: f64 = 140.0;

const CANVAS_LEFT: f64 = 31.0;
const CANVAS_RIGHT: f64 = 1253.0;
const CANVAS_TOP: f64 = 54.0;
const CANVAS_BOTTOM: f64 = 1346.0;

/// Drawing parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SvgOptions {
	pub width: u32,
	pub height: u32,
	pub circle_radius: u32,
	pub stroke_width: u32,
	/// Draw dashed lines along the board edges.
	pub show_guides: bool,
	/// Image referenced as the board background, if any.
	pub background_image: Option<String>,
}

impl Default for SvgOptions {
	fn default() -> Self {
		Self {
			width: 1290,
			height: 1393,
			circle_radius: 30,
			stroke_width: 5,
			show_guides: true,
			background_image: None,
		}
	}
}

/// Stroke color for a role.
pub fn role_hex(role: Role) -> &'static str {
	match role {
		Role::Start => "#00FF00",
		Role::Intermediate => "#0000FF",
		Role::Finish => "#FF0000",
		Role::Foothold => "#FF69B4",
	}
}

fn canvas_x(x: i32) -> f64 {
	CANVAS_LEFT + (x as f64 - BOARD_MIN_X) / (BOARD_MAX_X - BOARD_MIN_X) * (CANVAS_RIGHT - CANVAS_LEFT)
}

fn canvas_y(y: i32) -> f64 {
	CANVAS_BOTTOM - (y as f64 - BOARD_MIN_Y) / (BOARD_MAX_Y - BOARD_MIN_Y) * (CANVAS_BOTTOM - CANVAS_TOP)
}

/// Renders holds as unfilled circles colored by role.
pub fn holds_to_svg(holds: &[Hold], options: &SvgOptions) -> String {
	let (w, h) = (options.width, options.height);
	let mut svg = String::new();

	// Writing into a String cannot fail.
	let _ = writeln!(
		svg,
		r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#
	);
	if let Some(image) = &options.background_image {
		let _ = writeln!(svg, "  <defs>");
		let _ = writeln!(svg, r##"    <image id="background" width="{w}" height="{h}" xlink:href="{image}"/>"##);
		let _ = writeln!(svg, "  </defs>");
		let _ = writeln!(svg, r##"  <use xlink:href="#background" x="0" y="0"/>"##);
	}

	if options.show_guides {
		for x in [CANVAS_LEFT, CANVAS_RIGHT] {
			let _ = writeln!(
				svg,
				r#"  <line x1="{x}" y1="0" x2="{x}" y2="{h}" stroke="lightgray" stroke-width="1" stroke-dasharray="4"/>"#
			);
		}
		for y in [CANVAS_TOP, CANVAS_BOTTOM] {
			let _ = writeln!(
				svg,
				r#"  <line x1="0" y1="{y}" x2="{w}" y2="{y}" stroke="lightgray" stroke-width="1" stroke-dasharray="4"/>"#
			);
		}
	}

	for hold in holds {
		let _ = writeln!(
			svg,
			r#"  <circle cx="{:.1}" cy="{:.1}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
			canvas_x(hold.x),
			canvas_y(hold.y),
			options.circle_radius,
			role_hex(hold.role),
			options.stroke_width
		);
	}

	svg.push_str("</svg>\n");
	svg
}

/// Renders a route, drawing holds bottom to top.
pub fn route_to_svg(route: &Route, options: &SvgOptions) -> String {
	holds_to_svg(&route.bottom_to_top(), options)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn board_corners_map_to_guides() {
		assert_eq!(canvas_x(-64), CANVAS_LEFT);
		assert_eq!(canvas_x(64), CANVAS_RIGHT);
		assert_eq!(canvas_y(4), CANVAS_BOTTOM);
		assert_eq!(canvas_y(140), CANVAS_TOP);
	}

	#[test]
	fn one_circle_per_hold_in_role_color() {
		let holds = [Hold::new(0, 4, Role::Start), Hold::new(-64, 140, Role::Finish)];
		let svg = holds_to_svg(&holds, &SvgOptions::default());

		assert!(svg.starts_with("<svg viewBox=\"0 0 1290 1393\""));
		assert!(svg.trim_end().ends_with("</svg>"));
		assert_eq!(svg.matches("<circle").count(), 2);
		assert!(svg.contains(r##"<circle cx="642.0" cy="1346.0" r="30" fill="none" stroke="#00FF00" stroke-width="5"/>"##));
		assert!(svg.contains(r#"cx="31.0" cy="54.0""#));
		assert!(svg.contains("#FF0000"));
	}

	#[test]
	fn guides_and_background_are_optional() {
		let options = SvgOptions { show_guides: false, ..SvgOptions::default() };
		let svg = holds_to_svg(&[], &options);
		assert!(!svg.contains("<line"));
		assert!(!svg.contains("<image"));

		let options = SvgOptions { background_image: Some("board.png".to_owned()), ..SvgOptions::default() };
		let svg = holds_to_svg(&[], &options);
		assert_eq!(svg.matches("<line").count(), 4);
		assert!(svg.contains(r#"xlink:href="board.png""#));
	}
}
