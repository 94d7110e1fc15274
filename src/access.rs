//! Who may see which part of the site.
//!
//! An [Access] is resolved once from the profile of the signed-in user and
//! then passed to everything that needs to make a decision, rather than
//! every page looking at the profile on its own.

use crate::args::Access as Opts;
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::Member
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    None,
    Active,
    Expired,
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        SubscriptionStatus::None
    }
}

/// Profile row of a user as stored by the hosting backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub subscription: SubscriptionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    /// Marketing pages.
    Public,
    /// The booking form.
    Booking,
    /// Member area for paying subscribers.
    Vip,
    /// Dashboard for managing content, bookings and users.
    Admin,
}

impl FromStr for Area {
    type Err = AccessError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source {
            "public" => Ok(Area::Public),
            "booking" => Ok(Area::Booking),
            "vip" => Ok(Area::Vip),
            "admin" => Ok(Area::Admin),
            other => Err(AccessError::UnknownArea {
                input: other.to_string(),
            }),
        }
    }
}

impl Display for Area {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Area::Public => "public",
            Area::Booking => "booking",
            Area::Vip => "vip",
            Area::Admin => "admin",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    admin: bool,
    vip: bool,
}

impl Access {
    pub fn resolve(profile: &Profile) -> Access {
        let admin = profile.role == Role::Admin;
        Access {
            admin,
            // admins can look at everything members see
            vip: admin || profile.subscription == SubscriptionStatus::Active,
        }
    }

    /// Signed out visitors.
    #[cfg(test)]
    pub fn anonymous() -> Access {
        Access {
            admin: false,
            vip: false,
        }
    }

    pub fn allows(&self, area: Area) -> bool {
        match area {
            Area::Public | Area::Booking => true,
            Area::Vip => self.vip,
            Area::Admin => self.admin,
        }
    }

    pub fn require(&self, area: Area) -> Result<(), AccessError> {
        if self.allows(area) {
            Ok(())
        } else {
            Err(AccessError::Denied { area })
        }
    }
}

/// Loads a profile from YAML and prints whether it may enter the area.
#[tracing::instrument]
pub fn access(opts: &Opts) -> Result<(), AccessError> {
    let file = File::open(&opts.profile).map_err(AccessError::ProfileRead)?;
    let profile: Profile = serde_yaml::from_reader(file)?;
    debug!("Resolving access for {:?}", profile);

    Access::resolve(&profile).require(opts.area)?;
    println!("{}: allowed", opts.area);
    Ok(())
}

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Access to the {area} area requires a different role or subscription")]
    Denied { area: Area },
    #[error("Unknown area `{input}`, expected one of public, booking, vip, admin")]
    UnknownArea { input: String },
    #[error("Could not open profile: {0}")]
    ProfileRead(std::io::Error),
    #[error("Could not parse profile: {0}")]
    ProfileFormat(#[from] serde_yaml::Error),
}
