//! Core types for the graph object system
//!
//! These types describe the fixed set of graph object variants and the shape of
//! the fields each variant accepts. They are shared by the schema tables, the
//! registry and the object implementations.

use serde::{Deserialize, Serialize};

/// Every graph object variant known to the plotting service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjType {
    Figure,
    Data,
    Layout,
    XAxis,
    YAxis,
    Legend,
    Margin,
    Font,
    Annotations,
    Annotation,
    Marker,
    Line,
    ErrorX,
    ErrorY,
    Stream,
    // Traces
    Scatter,
    Bar,
    Histogram,
    Box,
    Heatmap,
    Contour,
    Histogram2d,
    Area,
}

impl ObjType {
    /// All variants, in registry order
    pub const ALL: &'static [ObjType] = &[
        ObjType::Figure,
        ObjType::Data,
        ObjType::Layout,
        ObjType::XAxis,
        ObjType::YAxis,
        ObjType::Legend,
        ObjType::Margin,
        ObjType::Font,
        ObjType::Annotations,
        ObjType::Annotation,
        ObjType::Marker,
        ObjType::Line,
        ObjType::ErrorX,
        ObjType::ErrorY,
        ObjType::Stream,
        ObjType::Scatter,
        ObjType::Bar,
        ObjType::Histogram,
        ObjType::Box,
        ObjType::Heatmap,
        ObjType::Contour,
        ObjType::Histogram2d,
        ObjType::Area,
    ];

    /// Canonical (class-style) name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            ObjType::Figure => "Figure",
            ObjType::Data => "Data",
            ObjType::Layout => "Layout",
            ObjType::XAxis => "XAxis",
            ObjType::YAxis => "YAxis",
            ObjType::Legend => "Legend",
            ObjType::Margin => "Margin",
            ObjType::Font => "Font",
            ObjType::Annotations => "Annotations",
            ObjType::Annotation => "Annotation",
            ObjType::Marker => "Marker",
            ObjType::Line => "Line",
            ObjType::ErrorX => "ErrorX",
            ObjType::ErrorY => "ErrorY",
            ObjType::Stream => "Stream",
            ObjType::Scatter => "Scatter",
            ObjType::Bar => "Bar",
            ObjType::Histogram => "Histogram",
            ObjType::Box => "Box",
            ObjType::Heatmap => "Heatmap",
            ObjType::Contour => "Contour",
            ObjType::Histogram2d => "Histogram2d",
            ObjType::Area => "Area",
        }
    }

    /// Look up a variant by name, ignoring case
    pub fn from_name(name: &str) -> Option<ObjType> {
        ObjType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Whether this variant is a data trace (an element of `Data`)
    pub fn is_trace(&self) -> bool {
        matches!(
            self,
            ObjType::Scatter
                | ObjType::Bar
                | ObjType::Histogram
                | ObjType::Box
                | ObjType::Heatmap
                | ObjType::Contour
                | ObjType::Histogram2d
                | ObjType::Area
        )
    }

    /// Whether instances of this variant are sequences rather than mappings
    pub fn is_list_like(&self) -> bool {
        matches!(self.shape(), ObjShape::List(_))
    }
}

impl std::fmt::Display for ObjType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a single field of a dict-like variant may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON value (numbers, strings, arrays of data, ...)
    Value,
    /// A nested graph object of the given variant
    Object(ObjType),
    /// An axis domain: `[start, end]` with `0 <= start < end <= 1`
    Domain,
}

/// What the elements of a list-like variant must be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A trace object, variant chosen by its `type` field (default scatter)
    Trace,
    /// Objects of one fixed variant
    Object(ObjType),
}

/// Structural shape of a variant
#[derive(Debug, Clone, Copy)]
pub enum ObjShape {
    /// Mapping with a fixed table of known fields
    Dict(&'static [(&'static str, FieldKind)]),
    /// Sequence of items
    List(ItemKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(ObjType::from_name("xaxis"), Some(ObjType::XAxis));
        assert_eq!(ObjType::from_name("XAXIS"), Some(ObjType::XAxis));
        assert_eq!(ObjType::from_name("Histogram2D"), Some(ObjType::Histogram2d));
        assert_eq!(ObjType::from_name("dict"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<String> = ObjType::ALL
            .iter()
            .map(|t| t.name().to_lowercase())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ObjType::ALL.len());
    }

    #[test]
    fn test_list_like_variants() {
        assert!(ObjType::Data.is_list_like());
        assert!(ObjType::Annotations.is_list_like());
        assert!(!ObjType::Layout.is_list_like());
        assert!(!ObjType::Scatter.is_list_like());
    }

    #[test]
    fn test_traces() {
        assert!(ObjType::Scatter.is_trace());
        assert!(ObjType::Histogram2d.is_trace());
        assert!(!ObjType::Layout.is_trace());
        assert!(!ObjType::Data.is_trace());
    }
}
