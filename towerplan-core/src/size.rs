//! Size classes that group instances by grid and radii.
//!
//! Every class shares the same radii and differs in grid side length and the
//! number of cities allowed.
//!
//! # Examples
//! ```
//! use towerplan_core::{Point, SizeClass, SizeName};
//!
//! let instance = SizeClass::SMALL.instance(vec![Point::new(3, 4)]);
//! assert!(SizeClass::SMALL.instance_has_size(&instance));
//! assert_eq!(SizeClass::classify(&instance), Some(SizeName::Small));
//! ```

use std::fmt;

use crate::{Instance, Point};

/// Parameters shared by every instance of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeClass {
    /// Grid side length `D`.
    pub grid_side_length: u32,
    /// Coverage radius `R_s`.
    pub coverage_radius: u32,
    /// Penalty radius `R_p`.
    pub penalty_radius: u32,
    /// Fewest cities an instance of this size may hold.
    pub min_num_cities: usize,
    /// Most cities an instance of this size may hold.
    pub max_num_cities: usize,
}

impl SizeClass {
    /// 30x30 grid with up to 40 cities.
    pub const SMALL: Self = Self::preset(30, 40);
    /// 50x50 grid with up to 50 cities.
    pub const MEDIUM: Self = Self::preset(50, 50);
    /// 100x100 grid with up to 60 cities.
    pub const LARGE: Self = Self::preset(100, 60);

    const fn preset(grid_side_length: u32, max_num_cities: usize) -> Self {
        Self {
            grid_side_length,
            coverage_radius: 4,
            penalty_radius: 11,
            min_num_cities: 1,
            max_num_cities,
        }
    }

    /// Whether `instance` matches this class.
    ///
    /// The grid and both radii must be equal and the city count must lie in
    /// `min_num_cities..=max_num_cities`.
    #[must_use]
    pub fn instance_has_size(&self, instance: &Instance) -> bool {
        instance.grid_side_length() == self.grid_side_length
            && instance.coverage_radius() == self.coverage_radius
            && instance.penalty_radius() == self.penalty_radius
            && (self.min_num_cities..=self.max_num_cities).contains(&instance.num_cities())
    }

    /// Build an instance of this class holding `cities`, without validating.
    #[must_use]
    pub fn instance(&self, cities: Vec<Point>) -> Instance {
        Instance::new(
            self.grid_side_length,
            self.coverage_radius,
            self.penalty_radius,
            cities,
        )
    }

    /// The first preset that `instance` matches.
    #[must_use]
    pub fn classify(instance: &Instance) -> Option<SizeName> {
        SizeName::ALL
            .into_iter()
            .find(|name| name.size_class().instance_has_size(instance))
    }
}

/// Name of a preset [`SizeClass`].
///
/// # Examples
/// ```
/// use towerplan_core::{SizeClass, SizeName};
///
/// let name: SizeName = "Medium".parse()?;
/// assert_eq!(name, SizeName::Medium);
/// assert_eq!(name.size_class(), SizeClass::MEDIUM);
/// assert_eq!(name.to_string(), "medium");
/// # Ok::<(), towerplan_core::UnknownSizeName>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SizeName {
    /// See [`SizeClass::SMALL`].
    Small,
    /// See [`SizeClass::MEDIUM`].
    Medium,
    /// See [`SizeClass::LARGE`].
    Large,
}

/// Error returned when parsing an unrecognised [`SizeName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size '{0}'")]
pub struct UnknownSizeName(pub String);

impl SizeName {
    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Return the size as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// The preset this name refers to.
    #[must_use]
    pub const fn size_class(self) -> SizeClass {
        match self {
            Self::Small => SizeClass::SMALL,
            Self::Medium => SizeClass::MEDIUM,
            Self::Large => SizeClass::LARGE,
        }
    }
}

impl fmt::Display for SizeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SizeName {
    type Err = UnknownSizeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(UnknownSizeName(s.to_owned())),
        }
    }
}

impl From<SizeName> for SizeClass {
    fn from(name: SizeName) -> Self {
        name.size_class()
    }
}
