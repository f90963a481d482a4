//! Problem instances: the grid, both radii and the cities to cover.
//!
//! The text format is four header lines (city count, grid side length,
//! coverage radius, penalty radius) followed by one `"{x} {y}"` line per
//! city. Lines starting with `#` are comments and may appear anywhere.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::text::ContentLines;
use crate::{ParseError, Point};

/// Structural invariants an [`Instance`] can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InstanceViolation {
    /// A city lies outside `[0, D) x [0, D)`.
    #[error("city ({city}) lies outside the {side}x{side} grid")]
    CityOutOfBounds {
        /// Offending city.
        city: Point,
        /// Grid side length `D`.
        side: u32,
    },
    /// Two cities share a coordinate.
    #[error("city ({city}) appears more than once")]
    DuplicateCity {
        /// Repeated coordinate.
        city: Point,
    },
}

/// An immutable problem statement.
///
/// Construction through [`Instance::new`] does not validate; call
/// [`Instance::validate`] or use [`Instance::parse`], which always returns a
/// structurally valid instance.
///
/// # Examples
/// ```
/// use towerplan_core::{Instance, Point};
///
/// let text = "# Small instance.\n2\n10\n1\n2\n1 0\n1 2";
/// let instance: Instance = text.parse()?;
/// assert_eq!(instance.num_cities(), 2);
/// assert_eq!(instance.cities()[1], Point::new(1, 2));
/// assert_eq!(instance.serialize_to_string(), "2\n10\n1\n2\n1 0\n1 2");
/// # Ok::<(), towerplan_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instance {
    grid_side_length: u32,
    coverage_radius: u32,
    penalty_radius: u32,
    cities: Vec<Point>,
}

impl Instance {
    /// Build an instance without validating it.
    #[must_use]
    pub const fn new(
        grid_side_length: u32,
        coverage_radius: u32,
        penalty_radius: u32,
        cities: Vec<Point>,
    ) -> Self {
        Self {
            grid_side_length,
            coverage_radius,
            penalty_radius,
            cities,
        }
    }

    /// Grid side length `D`; valid coordinates lie in `[0, D)`.
    #[must_use]
    pub const fn grid_side_length(&self) -> u32 {
        self.grid_side_length
    }

    /// Coverage radius `R_s`.
    #[must_use]
    pub const fn coverage_radius(&self) -> u32 {
        self.coverage_radius
    }

    /// Penalty radius `R_p`.
    #[must_use]
    pub const fn penalty_radius(&self) -> u32 {
        self.penalty_radius
    }

    /// Cities in input order.
    #[must_use]
    pub fn cities(&self) -> &[Point] {
        &self.cities
    }

    /// Number of cities `N`.
    #[must_use]
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Check that every city is in bounds and no city is repeated.
    ///
    /// # Errors
    /// Returns the first [`InstanceViolation`] found; bounds are checked for
    /// every city before duplicates.
    pub fn validate(&self) -> Result<(), InstanceViolation> {
        let side = self.grid_side_length;
        if let Some(&city) = self.cities.iter().find(|city| !city.in_square(side)) {
            return Err(InstanceViolation::CityOutOfBounds { city, side });
        }
        let mut seen = HashSet::with_capacity(self.cities.len());
        if let Some(&city) = self.cities.iter().find(|city| !seen.insert(**city)) {
            return Err(InstanceViolation::DuplicateCity { city });
        }
        Ok(())
    }

    /// Whether [`Instance::validate`] succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Parse an instance document given as lines.
    ///
    /// # Errors
    /// Returns [`ParseError::TruncatedInput`] when a header line is missing,
    /// [`ParseError::InvalidNumber`] or [`ParseError::Point`] for malformed
    /// lines, [`ParseError::CountMismatch`] when the city count disagrees
    /// with the city lines, and [`ParseError::InvalidInstance`] when the
    /// result breaks an invariant.
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = ContentLines::new(lines);
        let num_cities = content.header("city count")?;
        let grid_side_length = content.header("grid side length")?;
        let coverage_radius = content.header("coverage radius")?;
        let penalty_radius = content.header("penalty radius")?;
        let cities = content.points("cities", num_cities)?;

        let instance = Self::new(grid_side_length, coverage_radius, penalty_radius, cities);
        instance.validate().inspect_err(|violation| {
            log::debug!("rejecting parsed instance: {violation}");
        })?;
        Ok(instance)
    }

    /// Write the instance document, one newline-terminated line per field.
    ///
    /// # Errors
    /// Propagates errors from `out`.
    pub fn serialize<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// The instance document without a trailing newline.
    #[must_use]
    pub fn serialize_to_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            self.cities.len(),
            self.grid_side_length,
            self.coverage_radius,
            self.penalty_radius
        )?;
        for city in &self.cities {
            write!(f, "\n{city}")?;
        }
        Ok(())
    }
}

impl FromStr for Instance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}
