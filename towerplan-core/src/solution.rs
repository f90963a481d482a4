//! Candidate tower placements and their scoring.
//!
//! A [`Solution`] borrows the [`Instance`] it answers, so one instance can be
//! checked against many candidates. Validity is never enforced on
//! construction: [`Solution::validate`] reports the first broken rule and
//! [`Solution::parse`] refuses to return an invalid solution.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::text::ContentLines;
use crate::{Instance, ParseError, PenaltyModel, Point};

/// Validity rules a [`Solution`] can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolutionViolation {
    /// A tower lies outside `[0, D) x [0, D)`.
    #[error("tower ({tower}) lies outside the {side}x{side} grid")]
    TowerOutOfBounds {
        /// Offending tower.
        tower: Point,
        /// Grid side length `D`.
        side: u32,
    },
    /// No tower lies within the coverage radius of a city.
    #[error("city ({city}) is not within {radius} of any tower")]
    UncoveredCity {
        /// City left uncovered.
        city: Point,
        /// Coverage radius `R_s`.
        radius: u32,
    },
    /// Two towers share a coordinate.
    #[error("tower ({tower}) appears more than once")]
    DuplicateTower {
        /// Repeated coordinate.
        tower: Point,
    },
}

/// Towers placed for a particular instance.
///
/// # Examples
/// ```
/// use towerplan_core::{Instance, Point, Solution};
///
/// let instance = Instance::new(10, 1, 2, vec![Point::new(9, 0)]);
/// let solution = Solution::parse(["# Penalty: 170", "1", "9 1"], &instance)?;
/// assert!(solution.is_valid());
/// assert_eq!(solution.penalty(), 170.0);
/// # Ok::<(), towerplan_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<'a> {
    towers: Vec<Point>,
    instance: &'a Instance,
}

impl<'a> Solution<'a> {
    /// Pair `towers` with `instance` without validating.
    #[must_use]
    pub const fn new(towers: Vec<Point>, instance: &'a Instance) -> Self {
        Self { towers, instance }
    }

    /// Towers in placement order.
    #[must_use]
    pub fn towers(&self) -> &[Point] {
        &self.towers
    }

    /// The instance this solution answers.
    #[must_use]
    pub const fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Consume the solution, returning its towers.
    #[must_use]
    pub fn into_towers(self) -> Vec<Point> {
        self.towers
    }

    /// Whether some tower lies within the coverage radius of `city`.
    ///
    /// The comparison is exact, so a tower at precisely `R_s` covers.
    #[must_use]
    pub fn covers(&self, city: Point) -> bool {
        let radius = self.instance.coverage_radius();
        self.towers
            .iter()
            .any(|tower| city.distance_exact(*tower) <= radius)
    }

    /// Check bounds, coverage and uniqueness, in that order.
    ///
    /// # Errors
    /// Returns the first [`SolutionViolation`] found.
    pub fn validate(&self) -> Result<(), SolutionViolation> {
        let side = self.instance.grid_side_length();
        if let Some(&tower) = self.towers.iter().find(|tower| !tower.in_square(side)) {
            return Err(SolutionViolation::TowerOutOfBounds { tower, side });
        }
        if let Some(&city) = self
            .instance
            .cities()
            .iter()
            .find(|city| !self.covers(**city))
        {
            return Err(SolutionViolation::UncoveredCity {
                city,
                radius: self.instance.coverage_radius(),
            });
        }
        let mut seen = HashSet::with_capacity(self.towers.len());
        if let Some(&tower) = self.towers.iter().find(|tower| !seen.insert(**tower)) {
            return Err(SolutionViolation::DuplicateTower { tower });
        }
        Ok(())
    }

    /// Whether [`Solution::validate`] succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Drop repeated towers, keeping the first occurrence of each.
    ///
    /// # Examples
    /// ```
    /// use towerplan_core::{Instance, Point, Solution};
    ///
    /// let instance = Instance::new(10, 1, 2, vec![]);
    /// let a = Point::new(1, 1);
    /// let b = Point::new(2, 2);
    /// let mut solution = Solution::new(vec![a, b, a, b], &instance);
    /// solution.deduplicate();
    /// assert_eq!(solution.towers(), &[a, b]);
    /// ```
    pub fn deduplicate(&mut self) {
        let mut seen = HashSet::with_capacity(self.towers.len());
        self.towers.retain(|tower| seen.insert(*tower));
    }

    /// For each tower, how many other towers lie within the penalty radius.
    ///
    /// Each pair in range counts once for both of its towers.
    #[must_use]
    pub fn overlap_counts(&self) -> Vec<usize> {
        let radius = self.instance.penalty_radius();
        self.towers
            .iter()
            .enumerate()
            .map(|(index, first)| {
                self.towers
                    .iter()
                    .enumerate()
                    .filter(|&(other, second)| {
                        other != index && first.distance_exact(*second) <= radius
                    })
                    .count()
            })
            .collect()
    }

    /// Total penalty under the default [`PenaltyModel`].
    #[must_use]
    pub fn penalty(&self) -> f64 {
        self.penalty_with(&PenaltyModel::default())
    }

    /// Total penalty under `model`: the sum of every tower's penalty.
    #[must_use]
    pub fn penalty_with(&self, model: &PenaltyModel) -> f64 {
        self.overlap_counts()
            .into_iter()
            .map(|overlaps| model.tower_penalty(overlaps))
            .sum()
    }

    /// Parse a solution document for `instance`.
    ///
    /// Comment lines, including the `# Penalty:` annotation, are skipped.
    ///
    /// # Errors
    /// Returns [`ParseError::TruncatedInput`] when the tower count is
    /// missing, [`ParseError::InvalidNumber`] or [`ParseError::Point`] for
    /// malformed lines, [`ParseError::CountMismatch`] when the count
    /// disagrees with the tower lines, and [`ParseError::InvalidSolution`]
    /// when the towers are out of bounds, miss a city or repeat.
    pub fn parse<I, S>(lines: I, instance: &'a Instance) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = ContentLines::new(lines);
        let num_towers = content.header("tower count")?;
        let towers = content.points("towers", num_towers)?;

        let solution = Self::new(towers, instance);
        solution.validate().inspect_err(|violation| {
            log::debug!("rejecting parsed solution: {violation}");
        })?;
        Ok(solution)
    }

    /// Parse a solution document held in one string.
    ///
    /// `Solution` has no `FromStr` impl because it borrows the instance it
    /// answers; this is the string counterpart of `str::parse::<Instance>`.
    ///
    /// # Errors
    /// As for [`Solution::parse`].
    pub fn parse_str(text: &str, instance: &'a Instance) -> Result<Self, ParseError> {
        Self::parse(text.lines(), instance)
    }

    /// Write the tower count then one line per tower.
    ///
    /// # Errors
    /// Propagates errors from `out`.
    pub fn serialize<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Write a `# Penalty: <value>` comment followed by the solution.
    ///
    /// # Errors
    /// Propagates errors from `out`.
    pub fn serialize_with_penalty<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "# Penalty: {}", self.penalty())?;
        self.serialize(out)
    }

    /// The solution document without a trailing newline.
    #[must_use]
    pub fn serialize_to_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.towers.len())?;
        for tower in &self.towers {
            write!(f, "\n{tower}")?;
        }
        Ok(())
    }
}
