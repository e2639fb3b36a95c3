//! CSV point table export.
//!
//! One row per emitted pixel, numbered from 1 in emission order. Circle tables
//! carry an extra octant column relative to the circle center.

use crate::analysis::{AnalysisResult, CircleAnalysis, LineAnalysis};
use crate::error::Result;
use crate::geometry::Point;
use crate::raster::{octant, Octant};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A single exported pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRow {
    /// Strategy name as reported by the analyzer.
    pub algorithm: &'static str,
    /// 1-indexed position in emission order.
    pub step: usize,
    /// Pixel x.
    pub x: i32,
    /// Pixel y.
    pub y: i32,
    /// Octant around the circle center; `None` for lines.
    pub octant: Option<Octant>,
}

/// Table of exported pixels across one or more strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointTable {
    rows: Vec<PointRow>,
    with_octant: bool,
}

impl PointTable {
    /// Rows for every strategy of a line analysis.
    #[must_use]
    pub fn from_line_analysis(analysis: &LineAnalysis) -> Self {
        let mut table = Self { rows: Vec::new(), with_octant: false };
        for result in analysis.results.values() {
            table.extend(result, |_| None);
        }
        table
    }

    /// Rows for every strategy of a circle analysis, annotated with octants.
    #[must_use]
    pub fn from_circle_analysis(analysis: &CircleAnalysis) -> Self {
        let center = analysis.circle.center();
        let mut table = Self { rows: Vec::new(), with_octant: true };
        for result in analysis.results.values() {
            table.extend(result, |p| Some(octant(p, center)));
        }
        table
    }

    fn extend<F>(&mut self, result: &AnalysisResult, classify: F)
    where
        F: Fn(Point) -> Option<Octant>,
    {
        self.rows.reserve(result.points.len());
        for (i, p) in result.points.iter().enumerate() {
            self.rows.push(PointRow {
                algorithm: result.algorithm,
                step: i + 1,
                x: p.x,
                y: p.y,
                octant: classify(p),
            });
        }
    }

    /// All rows in export order.
    #[must_use]
    pub fn rows(&self) -> &[PointRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether rows carry an octant column.
    #[must_use]
    pub fn has_octant(&self) -> bool {
        self.with_octant
    }

    /// Write the table as CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.with_octant {
            writeln!(writer, "Algorithm,Step,X,Y,Octant")?;
        } else {
            writeln!(writer, "Algorithm,Step,X,Y")?;
        }

        for row in &self.rows {
            let label = row.algorithm.to_uppercase();
            match row.octant {
                Some(o) if self.with_octant => {
                    writeln!(writer, "{label},{},{},{},{o}", row.step, row.x, row.y)?;
                }
                _ => writeln!(writer, "{label},{},{},{}", row.step, row.x, row.y)?,
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Render the CSV to a string.
    #[must_use]
    pub fn to_csv_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_csv(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the CSV to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_circle, analyze_line};

    #[test]
    fn test_line_table_header_and_rows() {
        let analysis = analyze_line(0, 0, 2, 1);
        let table = PointTable::from_line_analysis(&analysis);
        assert!(!table.has_octant());
        assert_eq!(table.len(), 9);

        let csv = table.to_csv_string();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Algorithm,Step,X,Y");
        assert_eq!(lines[1], "DDA,1,0,0");
        assert!(lines.contains(&"BRESENHAM,2,1,1"));
        assert!(lines.contains(&"MIDPOINT,3,2,1"));
    }

    #[test]
    fn test_steps_are_one_indexed_per_algorithm() {
        let table = PointTable::from_line_analysis(&analyze_line(0, 0, 5, 0));
        let steps: Vec<usize> =
            table.rows().iter().filter(|r| r.algorithm == "Midpoint").map(|r| r.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_circle_table_has_octant() {
        let analysis = analyze_circle(0, 0, 5).unwrap();
        let table = PointTable::from_circle_analysis(&analysis);
        assert!(table.has_octant());

        let csv = table.to_csv_string();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Algorithm,Step,X,Y,Octant"));
        // Bresenham sorts first; its first pixel is (0, 5), octant 2.
        assert_eq!(lines.next(), Some("BRESENHAM,1,0,5,2"));
        assert!(table.rows().iter().all(|r| r.octant.is_some()));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.csv");
        let table = PointTable::from_line_analysis(&analyze_line(0, 0, 0, 3));
        table.write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1 + 3 * 4);
        assert!(content.starts_with("Algorithm,Step,X,Y\n"));
    }

    #[test]
    fn test_empty_table() {
        let table = PointTable::default();
        assert!(table.is_empty());
        assert_eq!(table.to_csv_string(), "Algorithm,Step,X,Y\n");
    }
}
