//! Category codes published by the Web of Trust API.
//!
//! Codes are grouped into bands by their hundreds digit. The 4xx codes belong
//! to the child-safety dimension and carry their own negative, questionable
//! and positive meanings. Bands are informational: website predicates compare
//! raw codes and never consult them.

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

/// Broad meaning of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryBand {
    Negative,
    Questionable,
    Neutral,
    Positive,
}

/// A category a site may be assigned, with its wire code as discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
#[repr(u32)]
pub enum Category {
    // Negative
    MalwareOrViruses = 101,
    PoorCustomerExperience = 102,
    Phishing = 103,
    Scam = 104,
    PotentiallyIllegal = 105,

    // Questionable
    MisleadingClaimsOrUnethical = 201,
    PrivacyRisks = 202,
    Suspicious = 203,
    HateOrDiscrimination = 204,
    Spam = 205,
    PotentiallyUnwantedPrograms = 206,
    AdsOrPopups = 207,

    // Neutral
    OnlineTracking = 301,
    AlternativeOrControversialMedicine = 302,
    OpinionsReligionPolitics = 303,
    Other = 304,

    // Child safety
    AdultContent = 401,
    IncidentalNudity = 402,
    GruesomeOrShocking = 403,
    SiteForKids = 404,

    // Positive
    GoodSite = 501,
}

impl Category {
    pub const ALL: [Category; 21] = [
        Category::MalwareOrViruses,
        Category::PoorCustomerExperience,
        Category::Phishing,
        Category::Scam,
        Category::PotentiallyIllegal,
        Category::MisleadingClaimsOrUnethical,
        Category::PrivacyRisks,
        Category::Suspicious,
        Category::HateOrDiscrimination,
        Category::Spam,
        Category::PotentiallyUnwantedPrograms,
        Category::AdsOrPopups,
        Category::OnlineTracking,
        Category::AlternativeOrControversialMedicine,
        Category::OpinionsReligionPolitics,
        Category::Other,
        Category::AdultContent,
        Category::IncidentalNudity,
        Category::GruesomeOrShocking,
        Category::SiteForKids,
        Category::GoodSite,
    ];

    /// Integer code used on the wire.
    pub fn code(&self) -> u32 {
        *self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }

    pub fn band(&self) -> CategoryBand {
        match self {
            Self::MalwareOrViruses
            | Self::PoorCustomerExperience
            | Self::Phishing
            | Self::Scam
            | Self::PotentiallyIllegal
            | Self::AdultContent => CategoryBand::Negative,

            Self::MisleadingClaimsOrUnethical
            | Self::PrivacyRisks
            | Self::Suspicious
            | Self::HateOrDiscrimination
            | Self::Spam
            | Self::PotentiallyUnwantedPrograms
            | Self::AdsOrPopups
            | Self::IncidentalNudity
            | Self::GruesomeOrShocking => CategoryBand::Questionable,

            Self::OnlineTracking
            | Self::AlternativeOrControversialMedicine
            | Self::OpinionsReligionPolitics
            | Self::Other => CategoryBand::Neutral,

            Self::GoodSite | Self::SiteForKids => CategoryBand::Positive,
        }
    }

    /// Whether the category rates the child-safety dimension.
    pub fn is_child_safety(&self) -> bool {
        matches!(
            self,
            Self::AdultContent | Self::IncidentalNudity | Self::GruesomeOrShocking | Self::SiteForKids
        )
    }
}

impl From<Category> for u32 {
    fn from(category: Category) -> Self {
        category.code()
    }
}

impl TryFrom<u32> for Category {
    type Error = UnknownCategory;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownCategory(code))
    }
}
