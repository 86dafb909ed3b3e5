//! Modelling horizon
//!
//! The model runs in annual steps from 2024 (index 0) to 2050 (index 26).
//! Every trajectory and cash-flow series is indexed by this horizon.

use serde::{Deserialize, Serialize};

/// First modelled calendar year
pub const START_YEAR: i32 = 2024;

/// Number of modelled years (2024..=2050)
pub const HORIZON_YEARS: usize = 27;

/// Years spent building the capture unit before it operates
pub const CONSTRUCTION_YEARS: usize = 2;

/// Last calendar year in which reversed auctions cover part of the specific cost
pub const AUCTION_CUTOFF_YEAR: i32 = 2040;

/// Maps horizon indices to calendar years and back
///
/// # Example
/// ```
/// use beccs_rdm_core::Horizon;
///
/// let horizon = Horizon::standard();
/// assert_eq!(horizon.calendar_year(0), 2024);
/// assert_eq!(horizon.calendar_year(26), 2050);
/// assert_eq!(horizon.index_of(2030), Some(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    start_year: i32,
    years: usize,
}

impl Horizon {
    /// The 2024-2050 horizon used throughout the model
    pub const fn standard() -> Self {
        Self {
            start_year: START_YEAR,
            years: HORIZON_YEARS,
        }
    }

    /// Calendar year of index `t`
    pub fn calendar_year(&self, t: usize) -> i32 {
        self.start_year + t as i32
    }

    /// Calendar year of index `t` as a real number, for comparison with
    /// sampled threshold years
    pub fn year_f64(&self, t: usize) -> f64 {
        self.calendar_year(t) as f64
    }

    /// Index of a calendar year, if it lies inside the horizon
    pub fn index_of(&self, year: i32) -> Option<usize> {
        let offset = year - self.start_year;
        if offset < 0 || offset as usize >= self.years {
            return None;
        }
        Some(offset as usize)
    }

    /// Number of years in the horizon
    pub fn len(&self) -> usize {
        self.years
    }

    pub fn is_empty(&self) -> bool {
        self.years == 0
    }

    /// Whether index `t` falls in the construction period of the capture unit
    pub fn is_construction_year(&self, t: usize) -> bool {
        t < CONSTRUCTION_YEARS
    }

    /// Whether reversed auctions still cover part of the specific cost in year `t`
    pub fn auction_active(&self, t: usize) -> bool {
        self.calendar_year(t) <= AUCTION_CUTOFF_YEAR
    }

    /// Years of operating experience at index `t` (0 in the first operating year)
    pub fn operating_experience(&self, t: usize) -> usize {
        t.saturating_sub(CONSTRUCTION_YEARS)
    }

    /// Iterate over all indices of the horizon
    pub fn indices(&self) -> std::ops::Range<usize> {
        0..self.years
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::standard()
    }
}
