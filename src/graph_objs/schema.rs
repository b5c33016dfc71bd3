//! Field tables for every graph object variant
//!
//! Each dict-like variant carries a static table of the keys it accepts and
//! what each key holds. Layout additionally accepts numbered axis slots
//! (`xaxis`, `xaxis2`, `yaxis13`, ...), matched by pattern.

use regex::Regex;
use std::sync::OnceLock;

use super::types::{FieldKind, ItemKind, ObjShape, ObjType};

const FIGURE_FIELDS: &[(&str, FieldKind)] = &[
    ("data", FieldKind::Object(ObjType::Data)),
    ("layout", FieldKind::Object(ObjType::Layout)),
];

const LAYOUT_FIELDS: &[(&str, FieldKind)] = &[
    ("title", FieldKind::Value),
    ("titlefont", FieldKind::Object(ObjType::Font)),
    ("font", FieldKind::Object(ObjType::Font)),
    ("width", FieldKind::Value),
    ("height", FieldKind::Value),
    ("autosize", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("legend", FieldKind::Object(ObjType::Legend)),
    ("margin", FieldKind::Object(ObjType::Margin)),
    ("annotations", FieldKind::Object(ObjType::Annotations)),
    ("paper_bgcolor", FieldKind::Value),
    ("plot_bgcolor", FieldKind::Value),
    ("hovermode", FieldKind::Value),
    ("dragmode", FieldKind::Value),
    ("separators", FieldKind::Value),
    ("barmode", FieldKind::Value),
    ("bargap", FieldKind::Value),
    ("bargroupgap", FieldKind::Value),
    ("boxmode", FieldKind::Value),
    ("boxgap", FieldKind::Value),
    ("boxgroupgap", FieldKind::Value),
    ("hidesources", FieldKind::Value),
];

// XAxis and YAxis share one table
const AXIS_FIELDS: &[(&str, FieldKind)] = &[
    ("title", FieldKind::Value),
    ("titlefont", FieldKind::Object(ObjType::Font)),
    ("domain", FieldKind::Domain),
    ("anchor", FieldKind::Value),
    ("overlaying", FieldKind::Value),
    ("side", FieldKind::Value),
    ("position", FieldKind::Value),
    ("range", FieldKind::Value),
    ("type", FieldKind::Value),
    ("rangemode", FieldKind::Value),
    ("autorange", FieldKind::Value),
    ("showgrid", FieldKind::Value),
    ("zeroline", FieldKind::Value),
    ("showline", FieldKind::Value),
    ("mirror", FieldKind::Value),
    ("gridcolor", FieldKind::Value),
    ("gridwidth", FieldKind::Value),
    ("linecolor", FieldKind::Value),
    ("linewidth", FieldKind::Value),
    ("zerolinecolor", FieldKind::Value),
    ("zerolinewidth", FieldKind::Value),
    ("ticks", FieldKind::Value),
    ("ticklen", FieldKind::Value),
    ("tickwidth", FieldKind::Value),
    ("tickcolor", FieldKind::Value),
    ("tickangle", FieldKind::Value),
    ("tickfont", FieldKind::Object(ObjType::Font)),
    ("showticklabels", FieldKind::Value),
    ("autotick", FieldKind::Value),
    ("nticks", FieldKind::Value),
    ("tick0", FieldKind::Value),
    ("dtick", FieldKind::Value),
    ("exponentformat", FieldKind::Value),
    ("showexponent", FieldKind::Value),
];

const LEGEND_FIELDS: &[(&str, FieldKind)] = &[
    ("x", FieldKind::Value),
    ("y", FieldKind::Value),
    ("xanchor", FieldKind::Value),
    ("yanchor", FieldKind::Value),
    ("traceorder", FieldKind::Value),
    ("font", FieldKind::Object(ObjType::Font)),
    ("bgcolor", FieldKind::Value),
    ("bordercolor", FieldKind::Value),
    ("borderwidth", FieldKind::Value),
];

const MARGIN_FIELDS: &[(&str, FieldKind)] = &[
    ("l", FieldKind::Value),
    ("r", FieldKind::Value),
    ("b", FieldKind::Value),
    ("t", FieldKind::Value),
    ("pad", FieldKind::Value),
    ("autoexpand", FieldKind::Value),
];

const FONT_FIELDS: &[(&str, FieldKind)] = &[
    ("family", FieldKind::Value),
    ("size", FieldKind::Value),
    ("color", FieldKind::Value),
];

const ANNOTATION_FIELDS: &[(&str, FieldKind)] = &[
    ("x", FieldKind::Value),
    ("y", FieldKind::Value),
    ("xref", FieldKind::Value),
    ("yref", FieldKind::Value),
    ("xanchor", FieldKind::Value),
    ("yanchor", FieldKind::Value),
    ("text", FieldKind::Value),
    ("font", FieldKind::Object(ObjType::Font)),
    ("align", FieldKind::Value),
    ("showarrow", FieldKind::Value),
    ("arrowhead", FieldKind::Value),
    ("arrowsize", FieldKind::Value),
    ("arrowwidth", FieldKind::Value),
    ("arrowcolor", FieldKind::Value),
    ("ax", FieldKind::Value),
    ("ay", FieldKind::Value),
    ("bgcolor", FieldKind::Value),
    ("bordercolor", FieldKind::Value),
    ("borderwidth", FieldKind::Value),
    ("borderpad", FieldKind::Value),
    ("opacity", FieldKind::Value),
];

const MARKER_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Value),
    ("size", FieldKind::Value),
    ("symbol", FieldKind::Value),
    ("opacity", FieldKind::Value),
    ("line", FieldKind::Object(ObjType::Line)),
    ("sizemode", FieldKind::Value),
    ("sizeref", FieldKind::Value),
    ("colorscale", FieldKind::Value),
];

const LINE_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Value),
    ("width", FieldKind::Value),
    ("dash", FieldKind::Value),
    ("shape", FieldKind::Value),
    ("smoothing", FieldKind::Value),
    ("opacity", FieldKind::Value),
];

// ErrorX and ErrorY share one table
const ERROR_FIELDS: &[(&str, FieldKind)] = &[
    ("type", FieldKind::Value),
    ("array", FieldKind::Value),
    ("arrayminus", FieldKind::Value),
    ("value", FieldKind::Value),
    ("valueminus", FieldKind::Value),
    ("symmetric", FieldKind::Value),
    ("traceref", FieldKind::Value),
    ("tracerefminus", FieldKind::Value),
    ("color", FieldKind::Value),
    ("thickness", FieldKind::Value),
    ("width", FieldKind::Value),
    ("opacity", FieldKind::Value),
    ("visible", FieldKind::Value),
];

const STREAM_FIELDS: &[(&str, FieldKind)] = &[
    ("token", FieldKind::Value),
    ("maxpoints", FieldKind::Value),
];

const SCATTER_FIELDS: &[(&str, FieldKind)] = &[
    ("x", FieldKind::Value),
    ("y", FieldKind::Value),
    ("type", FieldKind::Value),
    ("mode", FieldKind::Value),
    ("name", FieldKind::Value),
    ("text", FieldKind::Value),
    ("textposition", FieldKind::Value),
    ("textfont", FieldKind::Object(ObjType::Font)),
    ("marker", FieldKind::Object(ObjType::Marker)),
    ("line", FieldKind::Object(ObjType::Line)),
    ("error_x", FieldKind::Object(ObjType::ErrorX)),
    ("error_y", FieldKind::Object(ObjType::ErrorY)),
    ("fill", FieldKind::Value),
    ("fillcolor", FieldKind::Value),
    ("connectgaps", FieldKind::Value),
    ("opacity", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("visible", FieldKind::Value),
    ("xaxis", FieldKind::Value),
    ("yaxis", FieldKind::Value),
    ("stream", FieldKind::Object(ObjType::Stream)),
];

const BAR_FIELDS: &[(&str, FieldKind)] = &[
    ("x", FieldKind::Value),
    ("y", FieldKind::Value),
    ("type", FieldKind::Value),
    ("name", FieldKind::Value),
    ("text", FieldKind::Value),
    ("orientation", FieldKind::Value),
    ("marker", FieldKind::Object(ObjType::Marker)),
    ("error_x", FieldKind::Object(ObjType::ErrorX)),
    ("error_y", FieldKind::Object(ObjType::ErrorY)),
    ("opacity", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("visible", FieldKind::Value),
    ("xaxis", FieldKind::Value),
    ("yaxis", FieldKind::Value),
    ("stream", FieldKind::Object(ObjType::Stream)),
];

const HISTOGRAM_FIELDS: &[(&str, FieldKind)] = &[
    ("x", FieldKind::Value),
    ("y", FieldKind::Value),
    ("type", FieldKind::Value),
    ("name", FieldKind::Value),
    ("orientation", FieldKind::Value),
    ("histnorm", FieldKind::Value),
    ("autobinx", FieldKind::Value),
    ("nbinsx", FieldKind::Value),
    ("xbins", FieldKind::Value),
    ("autobiny", FieldKind::Value),
    ("nbinsy", FieldKind::Value),
    ("ybins", FieldKind::Value),
    ("marker", FieldKind::Object(ObjType::Marker)),
    ("error_x", FieldKind::Object(ObjType::ErrorX)),
    ("error_y", FieldKind::Object(ObjType::ErrorY)),
    ("opacity", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("visible", FieldKind::Value),
    ("xaxis", FieldKind::Value),
    ("yaxis", FieldKind::Value),
    ("stream", FieldKind::Object(ObjType::Stream)),
];

const BOX_FIELDS: &[(&str, FieldKind)] = &[
    ("y", FieldKind::Value),
    ("x0", FieldKind::Value),
    ("type", FieldKind::Value),
    ("name", FieldKind::Value),
    ("boxmean", FieldKind::Value),
    ("boxpoints", FieldKind::Value),
    ("jitter", FieldKind::Value),
    ("pointpos", FieldKind::Value),
    ("whiskerwidth", FieldKind::Value),
    ("fillcolor", FieldKind::Value),
    ("marker", FieldKind::Object(ObjType::Marker)),
    ("line", FieldKind::Object(ObjType::Line)),
    ("opacity", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("visible", FieldKind::Value),
    ("xaxis", FieldKind::Value),
    ("yaxis", FieldKind::Value),
    ("stream", FieldKind::Object(ObjType::Stream)),
];

// Heatmap and Contour share everything but the contour-specific keys
const HEATMAP_FIELDS: &[(&str, FieldKind)] = &[
    ("z", FieldKind::Value),
    ("x", FieldKind::Value),
    ("y", FieldKind::Value),
    ("type", FieldKind::Value),
    ("name", FieldKind::Value),
    ("x0", FieldKind::Value),
    ("dx", FieldKind::Value),
    ("y0", FieldKind::Value),
    ("dy", FieldKind::Value),
    ("colorscale", FieldKind::Value),
    ("reversescale", FieldKind::Value),
    ("showscale", FieldKind::Value),
    ("zauto", FieldKind::Value),
    ("zmin", FieldKind::Value),
    ("zmax", FieldKind::Value),
    ("opacity", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("visible", FieldKind::Value),
    ("xaxis", FieldKind::Value),
    ("yaxis", FieldKind::Value),
    ("stream", FieldKind::Object(ObjType::Stream)),
];

const CONTOUR_ONLY_FIELDS: &[&str] = &["autocontour", "ncontours", "contours", "line"];

const HISTOGRAM2D_FIELDS: &[(&str, FieldKind)] = &[
    ("x", FieldKind::Value),
    ("y", FieldKind::Value),
    ("type", FieldKind::Value),
    ("name", FieldKind::Value),
    ("histnorm", FieldKind::Value),
    ("autobinx", FieldKind::Value),
    ("nbinsx", FieldKind::Value),
    ("xbins", FieldKind::Value),
    ("autobiny", FieldKind::Value),
    ("nbinsy", FieldKind::Value),
    ("ybins", FieldKind::Value),
    ("colorscale", FieldKind::Value),
    ("reversescale", FieldKind::Value),
    ("showscale", FieldKind::Value),
    ("zauto", FieldKind::Value),
    ("zmin", FieldKind::Value),
    ("zmax", FieldKind::Value),
    ("opacity", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("visible", FieldKind::Value),
    ("xaxis", FieldKind::Value),
    ("yaxis", FieldKind::Value),
    ("stream", FieldKind::Object(ObjType::Stream)),
];

const AREA_FIELDS: &[(&str, FieldKind)] = &[
    ("r", FieldKind::Value),
    ("t", FieldKind::Value),
    ("type", FieldKind::Value),
    ("name", FieldKind::Value),
    ("marker", FieldKind::Object(ObjType::Marker)),
    ("opacity", FieldKind::Value),
    ("showlegend", FieldKind::Value),
    ("visible", FieldKind::Value),
    ("stream", FieldKind::Object(ObjType::Stream)),
];

/// Layout axis slots: `xaxis`, `xaxis1`, `yaxis12`, ...
fn axis_slot_regex() -> &'static Regex {
    static AXIS_SLOT: OnceLock<Regex> = OnceLock::new();
    AXIS_SLOT.get_or_init(|| Regex::new(r"^([xy])axis([1-9][0-9]*)?$").expect("valid regex"))
}

/// Resolve a layout key to the axis variant it names, if it is an axis slot
pub fn axis_slot(key: &str) -> Option<ObjType> {
    let caps = axis_slot_regex().captures(key)?;
    match &caps[1] {
        "x" => Some(ObjType::XAxis),
        _ => Some(ObjType::YAxis),
    }
}

impl ObjType {
    /// Structural shape of this variant
    pub fn shape(&self) -> ObjShape {
        match self {
            ObjType::Figure => ObjShape::Dict(FIGURE_FIELDS),
            ObjType::Data => ObjShape::List(ItemKind::Trace),
            ObjType::Layout => ObjShape::Dict(LAYOUT_FIELDS),
            ObjType::XAxis | ObjType::YAxis => ObjShape::Dict(AXIS_FIELDS),
            ObjType::Legend => ObjShape::Dict(LEGEND_FIELDS),
            ObjType::Margin => ObjShape::Dict(MARGIN_FIELDS),
            ObjType::Font => ObjShape::Dict(FONT_FIELDS),
            ObjType::Annotations => ObjShape::List(ItemKind::Object(ObjType::Annotation)),
            ObjType::Annotation => ObjShape::Dict(ANNOTATION_FIELDS),
            ObjType::Marker => ObjShape::Dict(MARKER_FIELDS),
            ObjType::Line => ObjShape::Dict(LINE_FIELDS),
            ObjType::ErrorX | ObjType::ErrorY => ObjShape::Dict(ERROR_FIELDS),
            ObjType::Stream => ObjShape::Dict(STREAM_FIELDS),
            ObjType::Scatter => ObjShape::Dict(SCATTER_FIELDS),
            ObjType::Bar => ObjShape::Dict(BAR_FIELDS),
            ObjType::Histogram => ObjShape::Dict(HISTOGRAM_FIELDS),
            ObjType::Box => ObjShape::Dict(BOX_FIELDS),
            ObjType::Heatmap | ObjType::Contour => ObjShape::Dict(HEATMAP_FIELDS),
            ObjType::Histogram2d => ObjShape::Dict(HISTOGRAM2D_FIELDS),
            ObjType::Area => ObjShape::Dict(AREA_FIELDS),
        }
    }

    /// What `key` holds on this variant, or `None` if the key is not recognized
    ///
    /// Always `None` for list-like variants.
    pub fn field_kind(&self, key: &str) -> Option<FieldKind> {
        let ObjShape::Dict(fields) = self.shape() else {
            return None;
        };

        if let Some((_, kind)) = fields.iter().find(|(name, _)| *name == key) {
            return Some(*kind);
        }

        match self {
            ObjType::Layout => axis_slot(key).map(FieldKind::Object),
            ObjType::Contour if CONTOUR_ONLY_FIELDS.contains(&key) => Some(match key {
                "line" => FieldKind::Object(ObjType::Line),
                _ => FieldKind::Value,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_slot_matching() {
        assert_eq!(axis_slot("xaxis"), Some(ObjType::XAxis));
        assert_eq!(axis_slot("xaxis1"), Some(ObjType::XAxis));
        assert_eq!(axis_slot("yaxis12"), Some(ObjType::YAxis));
        assert_eq!(axis_slot("xaxis0"), None);
        assert_eq!(axis_slot("zaxis1"), None);
        assert_eq!(axis_slot("xaxis1a"), None);
    }

    #[test]
    fn test_layout_accepts_axis_slots() {
        assert_eq!(
            ObjType::Layout.field_kind("xaxis3"),
            Some(FieldKind::Object(ObjType::XAxis))
        );
        assert_eq!(
            ObjType::Layout.field_kind("legend"),
            Some(FieldKind::Object(ObjType::Legend))
        );
        assert_eq!(ObjType::Layout.field_kind("bogus"), None);
    }

    #[test]
    fn test_axis_domain_field() {
        assert_eq!(ObjType::XAxis.field_kind("domain"), Some(FieldKind::Domain));
        assert_eq!(ObjType::YAxis.field_kind("anchor"), Some(FieldKind::Value));
        // Axis slots are a layout concept only
        assert_eq!(ObjType::XAxis.field_kind("xaxis2"), None);
    }

    #[test]
    fn test_contour_extends_heatmap() {
        assert_eq!(ObjType::Contour.field_kind("ncontours"), Some(FieldKind::Value));
        assert_eq!(ObjType::Heatmap.field_kind("ncontours"), None);
        assert_eq!(ObjType::Contour.field_kind("z"), Some(FieldKind::Value));
        assert_eq!(
            ObjType::Contour.field_kind("line"),
            Some(FieldKind::Object(ObjType::Line))
        );
    }

    #[test]
    fn test_list_like_has_no_fields() {
        assert_eq!(ObjType::Data.field_kind("x"), None);
        assert_eq!(ObjType::Annotations.field_kind("text"), None);
    }
}
