use super::{MenuLayout, TopMenuLayout};

const TOOLS: &[&str] = &[
	"move_tool",
	"transform_tool",
	"crop_tool",
	"-",
	"select_rectangle_tool",
	"select_ellipse_tool",
	"select_polygon_tool",
	"select_freehand_tool",
	"select_contiguous_tool",
	"select_similar_tool",
	"-",
	"brush_tool",
	"line_tool",
	"rectangle_tool",
	"ellipse_tool",
	"polygon_tool",
	"polyline_tool",
	"bezier_tool",
	"-",
	"gradient_tool",
	"fill_tool",
	"color_sampler_tool",
	"-",
	"text_tool",
	"measure_tool",
	"assistant_tool",
	"-",
	"zoom_tool",
	"pan_tool",
];

const EDIT: &[&str] = &[
	"undo",
	"redo",
	"-",
	"cut",
	"copy",
	"copy_merged",
	"paste",
	"paste_as_new_layer",
	"-",
	"clear",
	"fill_foreground",
	"fill_background",
	"-",
	"select_all",
	"deselect",
	"reselect",
	"invert_selection",
];

const LAYERS: &[&str] = &["new_layer", "duplicate_layer", "remove_layer", "-", "merge_down", "flatten_image"];

const VIEW: &[&str] = &[
	"zoom_in",
	"zoom_out",
	"reset_zoom",
	"-",
	"mirror_canvas",
	"rotate_canvas_left",
	"rotate_canvas_right",
	"reset_canvas_rotation",
];

const BRUSH: &[&str] = &["toggle_eraser", "-", "increase_brush_size", "decrease_brush_size"];

/// Layout matching the builtin command catalog.
pub fn builtin_layout() -> MenuLayout {
	MenuLayout::new(vec![
		TopMenuLayout::new("tools", "Tools", TOOLS.iter().copied()),
		TopMenuLayout::new("edit", "Edit", EDIT.iter().copied()),
		TopMenuLayout::new("layers", "Layers", LAYERS.iter().copied()),
		TopMenuLayout::new("view", "View", VIEW.iter().copied()),
		TopMenuLayout::new("brush", "Brush", BRUSH.iter().copied()),
	])
}
