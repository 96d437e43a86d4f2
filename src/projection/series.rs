//! Projection output structures

use std::io::Write;

use serde::{Deserialize, Serialize};

/// Accumulated earnings at the end of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub flat: f64,
    pub exponential: f64,
    pub optimized: f64,
}

/// Yearly samples of the three growth trajectories, starting at year 0
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Add a point
    pub fn push(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    /// Point for the final projected year
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Get summary of the final year
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();

        ProjectionSummary {
            horizon_years: last.map(|p| p.year).unwrap_or(0),
            final_flat: last.map(|p| p.flat).unwrap_or(0.0),
            final_exponential: last.map(|p| p.exponential).unwrap_or(0.0),
            final_optimized: last.map(|p| p.optimized).unwrap_or(0.0),
        }
    }

    /// Write `year,flat,exponential,optimized` rows with a header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for point in &self.points {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Final values of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub final_flat: f64,
    pub final_exponential: f64,
    pub final_optimized: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectionSeries {
        let mut series = ProjectionSeries::with_capacity(2);
        series.push(ProjectionPoint { year: 0, flat: 0.0, exponential: 0.0, optimized: 0.0 });
        series.push(ProjectionPoint { year: 1, flat: 12.0, exponential: 12.5, optimized: 14.0 });
        series
    }

    #[test]
    fn test_summary_uses_last_point() {
        let summary = sample().summary();
        assert_eq!(summary.horizon_years, 1);
        assert_eq!(summary.final_flat, 12.0);
        assert_eq!(summary.final_exponential, 12.5);
        assert_eq!(summary.final_optimized, 14.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionSeries::default().summary();
        assert_eq!(summary.horizon_years, 0);
        assert_eq!(summary.final_optimized, 0.0);
    }

    #[test]
    fn test_csv_output() {
        let mut buf = Vec::new();
        sample().write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("year,flat,exponential,optimized"));
        assert_eq!(lines.next(), Some("0,0.0,0.0,0.0"));
        assert_eq!(lines.next(), Some("1,12.0,12.5,14.0"));
        assert_eq!(lines.next(), None);
    }
}
