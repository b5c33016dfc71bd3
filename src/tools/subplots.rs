//! Subplot grid layouts
//!
//! Builds a figure whose layout places one x/y axis pair per cell of an
//! R x C grid. Cells are numbered row-major from 1. Row 0 sits at the bottom
//! of the figure (the renderer's origin is bottom-left), while the printed
//! grid preview lists the last row first.

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::graph_objs::{GraphObject, ObjType};
use crate::{PlotkitError, Result};

/// Grid dimensions and spacing for [`get_subplots`]
#[derive(Debug, Clone, PartialEq)]
pub struct SubplotSpec {
    /// Number of rows, evenly spaced vertically
    pub rows: usize,
    /// Number of columns, evenly spaced horizontally
    pub columns: usize,
    /// Space between columns, as a fraction of the figure width
    pub horizontal_spacing: f64,
    /// Space between rows, as a fraction of the figure height
    pub vertical_spacing: f64,
    /// Print a tab-delimited preview of the grid to stdout
    pub print_grid: bool,
}

impl SubplotSpec {
    /// A `rows` x `columns` grid with default spacing
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    pub fn with_print_grid(mut self, print_grid: bool) -> Self {
        self.print_grid = print_grid;
        self
    }
}

impl Default for SubplotSpec {
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 1,
            horizontal_spacing: 0.1,
            vertical_spacing: 0.15,
            print_grid: false,
        }
    }
}

/// Placement of a single subplot cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubplotDomain {
    /// 1-based subplot number
    pub number: usize,
    pub row: usize,
    pub column: usize,
    /// `(start, end)` along the x dimension
    pub x: (f64, f64),
    /// `(start, end)` along the y dimension
    pub y: (f64, f64),
}

impl SubplotDomain {
    pub fn xaxis_name(&self) -> String {
        format!("xaxis{}", self.number)
    }

    pub fn yaxis_name(&self) -> String {
        format!("yaxis{}", self.number)
    }

    /// Anchor of the x-axis: the y-axis of the same cell
    pub fn x_anchor(&self) -> String {
        format!("y{}", self.number)
    }

    /// Anchor of the y-axis: the x-axis of the same cell
    pub fn y_anchor(&self) -> String {
        format!("x{}", self.number)
    }
}

/// Compute the axis domains of every cell, in subplot-number order
///
/// Spacing is not range-checked; spacing too large for the grid yields
/// domains that figure validation rejects.
pub fn subplot_domains(spec: &SubplotSpec) -> Vec<SubplotDomain> {
    let columns = spec.columns as f64;
    let rows = spec.rows as f64;
    let plot_width = (1.0 - spec.horizontal_spacing * (columns - 1.0)) / columns;
    let plot_height = (1.0 - spec.vertical_spacing * (rows - 1.0)) / rows;

    let mut domains = Vec::with_capacity(spec.rows * spec.columns);
    for row in 0..spec.rows {
        for column in 0..spec.columns {
            let x_start = (plot_width + spec.horizontal_spacing) * column as f64;
            let y_start = (plot_height + spec.vertical_spacing) * row as f64;
            domains.push(SubplotDomain {
                number: domains.len() + 1,
                row,
                column,
                x: (x_start, x_start + plot_width),
                y: (y_start, y_start + plot_height),
            });
        }
    }
    domains
}

/// Tab-delimited preview of the grid, last row first
///
/// ```text
/// [3]	[4]
/// [1]	[2]
/// ```
pub fn grid_preview(rows: usize, columns: usize) -> String {
    let mut grid = String::new();
    let mut plot = 1;
    for _ in 0..rows {
        let mut line = String::new();
        for _ in 0..columns {
            line.push_str(&format!("[{}]\t", plot));
            plot += 1;
        }
        grid = format!("{}\n{}", line, grid);
    }
    grid
}

/// Build a figure whose layout holds one axis pair per subplot cell
///
/// The assembled figure goes through normal figure construction, so any
/// invalid domain (e.g. from oversized spacing) fails with
/// [`PlotkitError::SchemaValidation`].
pub fn get_subplots(spec: &SubplotSpec) -> Result<GraphObject> {
    if spec.rows == 0 || spec.columns == 0 {
        return Err(PlotkitError::SchemaValidation(format!(
            "a subplot grid needs at least one row and one column, got {}x{}",
            spec.rows, spec.columns
        )));
    }

    let mut layout = Map::new();
    for cell in subplot_domains(spec) {
        layout.insert(
            cell.xaxis_name(),
            json!({"domain": [cell.x.0, cell.x.1], "anchor": cell.x_anchor()}),
        );
        layout.insert(
            cell.yaxis_name(),
            json!({"domain": [cell.y.0, cell.y.1], "anchor": cell.y_anchor()}),
        );
    }

    debug!(
        rows = spec.rows,
        columns = spec.columns,
        axes = layout.len(),
        "Assembled subplot layout"
    );

    if spec.print_grid {
        println!("This is the format of your plot grid!");
        println!("{}", grid_preview(spec.rows, spec.columns));
    }

    let mut figure = Map::new();
    figure.insert("layout".to_string(), Value::Object(layout));
    GraphObject::new(ObjType::Figure, Value::Object(figure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_objs::GraphObjTrait;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn domain_of(fig: &GraphObject, slot: &str) -> (f64, f64) {
        let domain = &fig.get("layout").unwrap()[slot]["domain"];
        (domain[0].as_f64().unwrap(), domain[1].as_f64().unwrap())
    }

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_single_cell() {
        let fig = get_subplots(&SubplotSpec::default()).unwrap();
        assert_eq!(fig.obj_type(), ObjType::Figure);

        let layout = fig.get("layout").unwrap().as_object().unwrap();
        assert_eq!(layout.len(), 2);
        assert_close(domain_of(&fig, "xaxis1"), (0.0, 1.0));
        assert_close(domain_of(&fig, "yaxis1"), (0.0, 1.0));
        assert_eq!(layout["xaxis1"]["anchor"], "y1");
        assert_eq!(layout["yaxis1"]["anchor"], "x1");
        assert!(fig.get("data").is_none());
    }

    #[test]
    fn test_two_by_two_with_spacing() {
        let spec = SubplotSpec::new(2, 2).with_spacing(0.1, 0.15);
        let fig = get_subplots(&spec).unwrap();

        let layout = fig.get("layout").unwrap().as_object().unwrap();
        assert_eq!(layout.len(), 8);

        assert_close(domain_of(&fig, "xaxis1"), (0.0, 0.45));
        assert_close(domain_of(&fig, "yaxis1"), (0.0, 0.425));
        assert_close(domain_of(&fig, "xaxis2"), (0.55, 1.0));
        assert_close(domain_of(&fig, "yaxis2"), (0.0, 0.425));
        // Second row sits above the first
        assert_close(domain_of(&fig, "xaxis3"), (0.0, 0.45));
        assert_close(domain_of(&fig, "yaxis3"), (0.575, 1.0));
        assert_close(domain_of(&fig, "yaxis4"), (0.575, 1.0));
    }

    #[test]
    fn test_anchors_are_slot_names() {
        let fig = get_subplots(&SubplotSpec::new(2, 3)).unwrap();
        let layout = fig.get("layout").unwrap();
        for n in 1..=6 {
            assert_eq!(layout[format!("xaxis{}", n)]["anchor"], format!("y{}", n));
            assert_eq!(layout[format!("yaxis{}", n)]["anchor"], format!("x{}", n));
        }
    }

    #[test]
    fn test_numbering_is_row_major() {
        let cells = subplot_domains(&SubplotSpec::new(2, 3));
        let order: Vec<(usize, usize)> = cells.iter().map(|c| (c.row, c.column)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(cells[4].number, 5);
        assert_eq!(cells[4].xaxis_name(), "xaxis5");
    }

    #[test]
    fn test_oversized_spacing_fails_validation() {
        let spec = SubplotSpec::new(1, 3).with_spacing(0.6, 0.0);
        let err = get_subplots(&spec).unwrap_err();
        assert!(matches!(err, PlotkitError::SchemaValidation(_)));
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_zero_rows_rejected() {
        assert!(get_subplots(&SubplotSpec::new(0, 2)).is_err());
        assert!(get_subplots(&SubplotSpec::new(2, 0)).is_err());
    }

    #[test]
    fn test_grid_preview_puts_first_row_last() {
        assert_eq!(grid_preview(1, 1), "[1]\t\n");
        assert_eq!(grid_preview(2, 2), "[3]\t[4]\t\n[1]\t[2]\t\n");
        assert_eq!(grid_preview(3, 1), "[3]\t\n[2]\t\n[1]\t\n");
    }

    #[test]
    fn test_print_grid_does_not_change_figure() {
        let quiet = get_subplots(&SubplotSpec::new(2, 2)).unwrap();
        let loud = get_subplots(&SubplotSpec::new(2, 2).with_print_grid(true)).unwrap();
        assert_eq!(quiet, loud);
    }

    proptest! {
        #[test]
        fn prop_zero_spacing_tiles_unit_square(rows in 1usize..8, columns in 1usize..8) {
            let spec = SubplotSpec::new(rows, columns).with_spacing(0.0, 0.0);
            let cells = subplot_domains(&spec);
            prop_assert_eq!(cells.len(), rows * columns);

            let area: f64 = cells
                .iter()
                .map(|c| (c.x.1 - c.x.0) * (c.y.1 - c.y.0))
                .sum();
            prop_assert!((area - 1.0).abs() < EPS);

            for cell in &cells {
                let x_expected = cell.column as f64 / columns as f64;
                let y_expected = cell.row as f64 / rows as f64;
                prop_assert!((cell.x.0 - x_expected).abs() < EPS);
                prop_assert!((cell.y.0 - y_expected).abs() < EPS);
                if cell.column + 1 < columns {
                    let right = &cells[cell.number];
                    prop_assert!((cell.x.1 - right.x.0).abs() < EPS);
                }
            }
            prop_assert!(get_subplots(&spec).is_ok());
        }

        #[test]
        fn prop_valid_spacing_yields_valid_domains(
            rows in 1usize..6,
            columns in 1usize..6,
            horizontal in 0.0f64..1.0,
            vertical in 0.0f64..1.0,
        ) {
            prop_assume!(horizontal * (columns as f64 - 1.0) < 0.99);
            prop_assume!(vertical * (rows as f64 - 1.0) < 0.99);

            let spec = SubplotSpec::new(rows, columns).with_spacing(horizontal, vertical);
            prop_assert!(get_subplots(&spec).is_ok());

            for cell in subplot_domains(&spec) {
                for (start, end) in [cell.x, cell.y] {
                    prop_assert!(start >= -EPS);
                    prop_assert!(start < end);
                    prop_assert!(end <= 1.0 + EPS);
                }
            }
        }
    }
}
