//! The closed set of crime categories tracked by the pipeline.
//!
//! Each category is both a feature column in the input spreadsheet and a
//! label source for its own classifier. The set is fixed at compile time;
//! any spreadsheet missing one of these columns is rejected at load.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven tracked crime types, in spreadsheet column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CrimeCategory {
    #[serde(rename = "rape")]
    Rape,
    #[serde(rename = "kidnapping_and_abduction")]
    KidnappingAndAbduction,
    #[serde(rename = "dowry_deaths")]
    DowryDeaths,
    #[serde(rename = "assault_on_women_with_intent_to_outrage_her_modesty")]
    AssaultWithIntentToOutrageModesty,
    #[serde(rename = "insult_to_modesty_of_women")]
    InsultToModesty,
    #[serde(rename = "cruelty_by_husband_or_his_relatives")]
    CrueltyByHusbandOrRelatives,
    #[serde(rename = "importation_of_girls")]
    ImportationOfGirls,
}

impl CrimeCategory {
    /// All categories, in the fixed feature-column order.
    pub const ALL: [CrimeCategory; 7] = [
        CrimeCategory::Rape,
        CrimeCategory::KidnappingAndAbduction,
        CrimeCategory::DowryDeaths,
        CrimeCategory::AssaultWithIntentToOutrageModesty,
        CrimeCategory::InsultToModesty,
        CrimeCategory::CrueltyByHusbandOrRelatives,
        CrimeCategory::ImportationOfGirls,
    ];

    /// Exact spreadsheet column name for this category.
    pub fn column_name(&self) -> &'static str {
        match self {
            CrimeCategory::Rape => "rape",
            CrimeCategory::KidnappingAndAbduction => "kidnapping_and_abduction",
            CrimeCategory::DowryDeaths => "dowry_deaths",
            CrimeCategory::AssaultWithIntentToOutrageModesty => {
                "assault_on_women_with_intent_to_outrage_her_modesty"
            }
            CrimeCategory::InsultToModesty => "insult_to_modesty_of_women",
            CrimeCategory::CrueltyByHusbandOrRelatives => {
                "cruelty_by_husband_or_his_relatives"
            }
            CrimeCategory::ImportationOfGirls => "importation_of_girls",
        }
    }

    /// Human-readable label used in status lines and chart ticks.
    pub fn label(&self) -> &'static str {
        match self {
            CrimeCategory::Rape => "Rape",
            CrimeCategory::KidnappingAndAbduction => "Kidnapping and abduction",
            CrimeCategory::DowryDeaths => "Dowry deaths",
            CrimeCategory::AssaultWithIntentToOutrageModesty => {
                "Assault on women with intent to outrage her modesty"
            }
            CrimeCategory::InsultToModesty => "Insult to modesty of women",
            CrimeCategory::CrueltyByHusbandOrRelatives => {
                "Cruelty by husband or his relatives"
            }
            CrimeCategory::ImportationOfGirls => "Importation of girls",
        }
    }

    /// Position of this category's column in the feature matrix.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .expect("category missing from ALL")
    }
}

impl fmt::Display for CrimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for CrimeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.column_name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown crime category: {}. Expected one of: {}",
                    s,
                    Self::ALL
                        .iter()
                        .map(|c| c.column_name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
