use std::fmt;

use linfit_core::Observer;
use linfit_solvers::scan::{Action, Event};

/// One recorded candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    /// The evaluated `x`.
    pub x: u64,

    /// The chosen `y`, or `None` if the candidate was excluded.
    pub y: Option<u64>,

    /// The residual, or `f64::NAN` if the candidate was excluded.
    pub residual: f64,
}

/// Records every candidate a scan evaluates.
///
/// Pass `&mut table` to the solver to keep the table for display afterwards.
/// The [`Display`](fmt::Display) impl renders one line per candidate.
#[derive(Debug, Clone, Default)]
pub struct ResidualTable {
    rows: Vec<Row>,
}

impl ResidualTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded rows in scan order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of recorded rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes all rows, so the table can be reused for another target.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    fn record(&mut self, event: &Event) {
        let row = match *event {
            Event::Evaluated { candidate, .. } => Row {
                x: candidate.x,
                y: Some(candidate.y),
                residual: candidate.residual,
            },
            Event::Excluded { x, .. } => Row {
                x,
                y: None,
                residual: f64::NAN,
            },
        };
        self.rows.push(row);
    }
}

impl Observer<Event, Action> for ResidualTable {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.record(event);
        None
    }
}

/// Allows `&mut ResidualTable` to be passed to solvers that take an observer
/// by value, so the table can be displayed after the solve completes.
impl Observer<Event, Action> for &mut ResidualTable {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}

impl fmt::Display for ResidualTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);

        writeln!(f, "{:>10} {:>10} {:>14}", "x", "y", "residual")?;
        for row in &self.rows {
            match row.y {
                Some(y) => writeln!(
                    f,
                    "{:>10} {:>10} {:>14.precision$}",
                    row.x, y, row.residual
                )?,
                None => writeln!(f, "{:>10} {:>10} {:>14}", row.x, "-", "excluded")?,
            }
        }
        Ok(())
    }
}
