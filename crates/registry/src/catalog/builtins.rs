use super::macros::commands;

commands!(pub static BUILTIN_COMMANDS = {
	Tool move_tool => "Move", "tool.move";
	Tool transform_tool => "Transform", "tool.transform";
	Tool crop_tool => "Crop", "tool.crop";
	Tool select_rectangle_tool => "Rectangular Selection", "tool.select.rectangle";
	Tool select_ellipse_tool => "Elliptical Selection", "tool.select.ellipse";
	Tool select_polygon_tool => "Polygonal Selection", "tool.select.polygon";
	Tool select_freehand_tool => "Freehand Selection", "tool.select.freehand";
	Tool select_contiguous_tool => "Contiguous Selection", "tool.select.contiguous";
	Tool select_similar_tool => "Similar Color Selection", "tool.select.similar";
	Tool brush_tool => "Freehand Brush", "tool.brush";
	Tool line_tool => "Line", "tool.line";
	Tool rectangle_tool => "Rectangle", "tool.rectangle";
	Tool ellipse_tool => "Ellipse", "tool.ellipse";
	Tool polygon_tool => "Polygon", "tool.polygon";
	Tool polyline_tool => "Polyline", "tool.polyline";
	Tool bezier_tool => "Bezier Curve", "tool.bezier";
	Tool gradient_tool => "Gradient", "tool.gradient";
	Tool fill_tool => "Fill", "tool.fill";
	Tool color_sampler_tool => "Color Sampler", "tool.color_sampler";
	Tool text_tool => "Text", "tool.text";
	Tool measure_tool => "Measure", "tool.measure";
	Tool assistant_tool => "Assistant", "tool.assistant";
	Tool zoom_tool => "Zoom", "tool.zoom";
	Tool pan_tool => "Pan", "tool.pan";

	Action undo => "Undo", "edit.undo";
	Action redo => "Redo", "edit.redo";
	Action cut => "Cut", "edit.cut";
	Action copy => "Copy", "edit.copy";
	Action copy_merged => "Copy Merged", "edit.copy_merged";
	Action paste => "Paste", "edit.paste";
	Action paste_as_new_layer => "Paste as New Layer", "edit.paste_new_layer";
	Action clear => "Clear", "edit.clear";
	Action fill_foreground => "Fill with Foreground Color", "edit.fill_foreground";
	Action fill_background => "Fill with Background Color", "edit.fill_background";

	Action select_all => "Select All", "select.all";
	Action deselect => "Deselect", "select.none";
	Action reselect => "Reselect", "select.reselect";
	Action invert_selection => "Invert Selection", "select.invert";

	Action new_layer => "New Paint Layer", "layer.new";
	Action duplicate_layer => "Duplicate Layer", "layer.duplicate";
	Action remove_layer => "Remove Layer", "layer.remove";
	Action merge_down => "Merge Down", "layer.merge_down";
	Action flatten_image => "Flatten Image", "layer.flatten";

	Action zoom_in => "Zoom In", "view.zoom_in";
	Action zoom_out => "Zoom Out", "view.zoom_out";
	Action reset_zoom => "Reset Zoom", "view.zoom_reset";
	Action mirror_canvas => "Mirror Canvas", "view.mirror";
	Action rotate_canvas_left => "Rotate Canvas Left", "view.rotate_left";
	Action rotate_canvas_right => "Rotate Canvas Right", "view.rotate_right";
	Action reset_canvas_rotation => "Reset Canvas Rotation", "view.rotate_reset";

	Action toggle_eraser => "Toggle Eraser Mode", "brush.eraser";
	Action increase_brush_size => "Increase Brush Size", "brush.size_up";
	Action decrease_brush_size => "Decrease Brush Size", "brush.size_down";
});
