//! OpenSCAD export of a grid as a cylindrical planter.
//!
//! The script embeds the grid as a literal `ca_grid` array followed by a fixed
//! `cylindrical_planter()` module. The module derives `height` and
//! `num_slices` from the array at render time and places one small cylinder
//! per active cell: column `s` maps to angle `s * 360 / num_slices` and row
//! `h` to `z = h`. Only the grid values and the planter constants vary.

use crate::error::{IoError, Result};
use ca_planter_core::config::PlanterConfig;
use ca_planter_core::rule::Rule;
use ca_planter_data::Grid;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// File stem shared by every artifact of a run: `ca_output_w<W>xh<H>_rule_<R>`.
pub fn output_stem(width: usize, height: usize, rule: Rule) -> String {
    format!("ca_output_w{width}xh{height}_rule_{}", rule.number())
}

pub fn scad_filename(width: usize, height: usize, rule: Rule) -> String {
    format!("{}.scad", output_stem(width, height, rule))
}

/// Renders the complete script.
pub fn render_scad(grid: &Grid, planter: &PlanterConfig) -> String {
    // Each cell takes two bytes ("0,") plus row brackets.
    let mut out = String::with_capacity(grid.cells().len() * 2 + grid.height() * 8 + 1024);

    out.push_str("ca_grid = [\n");
    for row in grid.rows() {
        out.push_str("  [");
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push(char::from(b'0' + cell));
        }
        out.push_str("],\n");
    }
    out.push_str("];\n\n");

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"module cylindrical_planter() {{
    height = len(ca_grid);         // time steps, one unit per row
    radius = {radius};
    thickness = {thickness};
    num_slices = len(ca_grid[0]);  // cells around the circumference

    for (h = [0 : height-1]) {{
        for (s = [0 : num_slices-1]) {{
            angle = s * 360 / num_slices;
            z_pos = h;
            if (ca_grid[h][s] == 1) {{
                translate([radius * cos(angle), radius * sin(angle), z_pos])
                    cylinder(r=thickness, h=1, center=false);
            }}
        }}
    }}
}}

cylindrical_planter();
"#,
        radius = planter.radius,
        thickness = planter.thickness,
    );
    out
}

/// Writes the script into `dir` under the conventional name and returns its path.
pub fn write_scad(
    grid: &Grid,
    rule: Rule,
    planter: &PlanterConfig,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    if !(planter.radius > 0.0 && planter.thickness > 0.0) {
        return Err(IoError::validation(format!(
            "planter radius and thickness must be positive, got {} and {}",
            planter.radius, planter.thickness
        )));
    }

    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("creating output directory {:?}", dir))
    })?;

    let path = dir.join(scad_filename(grid.width(), grid.height(), rule));
    fs::write(&path, render_scad(grid, planter))
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing SCAD to {:?}", path)))?;

    tracing::info!(path = %path.display(), "Planter model written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap()
    }

    #[test]
    fn test_filename_convention() {
        assert_eq!(
            scad_filename(400, 60, Rule::from(30u8)),
            "ca_output_w400xh60_rule_30.scad"
        );
    }

    #[test]
    fn test_embedded_grid_literal() {
        let scad = render_scad(&sample(), &PlanterConfig::default());
        assert!(scad.starts_with("ca_grid = [\n  [0,1,0],\n  [1,1,1],\n];\n\n"));
    }

    #[test]
    fn test_template_body() {
        let scad = render_scad(&sample(), &PlanterConfig::default());
        assert!(scad.contains("module cylindrical_planter() {"));
        assert!(scad.contains("height = len(ca_grid);"));
        assert!(scad.contains("num_slices = len(ca_grid[0]);"));
        assert!(scad.contains("radius = 40;"));
        assert!(scad.contains("thickness = 2;"));
        assert!(scad.contains("angle = s * 360 / num_slices;"));
        assert!(scad.contains("if (ca_grid[h][s] == 1) {"));
        assert!(scad.contains("cylinder(r=thickness, h=1, center=false);"));
        assert!(scad.trim_end().ends_with("cylindrical_planter();"));
    }

    #[test]
    fn test_planter_constants_interpolated() {
        let planter = PlanterConfig {
            radius: 55.5,
            thickness: 1.25,
        };
        let scad = render_scad(&sample(), &planter);
        assert!(scad.contains("radius = 55.5;"));
        assert!(scad.contains("thickness = 1.25;"));
    }

    #[test]
    fn test_balanced_braces() {
        let scad = render_scad(&sample(), &PlanterConfig::default());
        assert_eq!(scad.matches('{').count(), scad.matches('}').count());
        assert_eq!(scad.matches('[').count(), scad.matches(']').count());
    }

    #[test]
    fn test_rejects_non_positive_planter() {
        let planter = PlanterConfig {
            radius: 0.0,
            thickness: 2.0,
        };
        let dir = std::env::temp_dir().join("ca_planter_scad_reject");
        let err = write_scad(&sample(), Rule::from(30u8), &planter, &dir).unwrap_err();
        assert!(matches!(err, IoError::Validation(_)));
    }
}
