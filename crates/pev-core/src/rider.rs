//! Riders and their driving credentials.

use crate::{RiderId, Timestamp};

/// Minimum age to rent any PEV class.
pub const MIN_RIDER_AGE: u8 = 14;

/// A rider's driving license.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriversLicense {
    /// Issuing authority's license number.
    pub number: String,
    /// The instant the license stops being valid.
    pub expires: Timestamp,
}

impl DriversLicense {
    pub fn new(number: impl Into<String>, expires: Timestamp) -> Self {
        Self { number: number.into(), expires }
    }

    /// `true` if the license is still valid at `at`.
    #[inline]
    pub fn valid_at(&self, at: Timestamp) -> bool {
        at < self.expires
    }
}

/// Why a rider may not rent, or confirmation that they may.
///
/// Checks are ordered: helmet first, then license, then age.  The first
/// failing rule wins, so a helmetless rider with an expired license reports
/// `NoHelmet`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Eligibility {
    Eligible,
    NoHelmet,
    LicenseExpired,
    UnderAge,
}

impl Eligibility {
    #[inline]
    pub fn is_eligible(self) -> bool {
        self == Eligibility::Eligible
    }
}

/// The acting party of a rental: owns the rent action and the eligibility
/// rules attached to it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub age: u8,
    pub has_helmet: bool,
    pub license: DriversLicense,
}

impl Rider {
    pub fn new(
        id: RiderId,
        name: impl Into<String>,
        age: u8,
        has_helmet: bool,
        license: DriversLicense,
    ) -> Self {
        Self { id, name: name.into(), age, has_helmet, license }
    }

    /// Apply the eligibility rules for a rental starting at `at`.
    pub fn eligibility(&self, at: Timestamp) -> Eligibility {
        if !self.has_helmet {
            Eligibility::NoHelmet
        } else if !self.license.valid_at(at) {
            Eligibility::LicenseExpired
        } else if self.age < MIN_RIDER_AGE {
            Eligibility::UnderAge
        } else {
            Eligibility::Eligible
        }
    }
}
