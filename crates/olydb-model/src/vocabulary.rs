//! Closed vocabularies shared by data files and presentation.
//!
//! The string codes are part of the data format: they key maps in the snapshot
//! and in every derived summary, so they must not change.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Olympiad a competition belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Source {
    /// International Mathematical Olympiad
    #[display("IMO")]
    Imo,
    /// European Girls' Mathematical Olympiad
    #[display("EGMO")]
    Egmo,
    /// Romanian Master of Mathematics
    #[display("RMM")]
    Rmm,
    /// Asian Pacific Mathematics Olympiad
    #[display("APMO")]
    Apmo,
    /// Balkan Mathematical Olympiad
    #[display("BMO")]
    Bmo,
    /// Middle European Mathematical Olympiad
    #[display("MEMO")]
    Memo,
    /// Pan-African Mathematics Olympiad
    #[display("PAMO")]
    Pamo,
}

impl Source {
    /// Every source, in declaration order.
    pub const ALL: [Source; 7] = [
        Source::Imo,
        Source::Egmo,
        Source::Rmm,
        Source::Apmo,
        Source::Bmo,
        Source::Memo,
        Source::Pamo,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Source::Imo => "IMO",
            Source::Egmo => "EGMO",
            Source::Rmm => "RMM",
            Source::Apmo => "APMO",
            Source::Bmo => "BMO",
            Source::Memo => "MEMO",
            Source::Pamo => "PAMO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown code '{code}'")]
pub struct UnknownCodeError {
    code: String,
}

impl FromStr for Source {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCodeError { code: s.to_owned() })
    }
}

/// Medal tier awarded to a contestant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Award {
    #[display("gold")]
    Gold,
    #[display("silver")]
    Silver,
    #[display("bronze")]
    Bronze,
    #[display("honourable_mention")]
    HonourableMention,
}

impl Award {
    /// Every award, from the highest tier down.
    pub const ALL: [Award; 4] = [
        Award::Gold,
        Award::Silver,
        Award::Bronze,
        Award::HonourableMention,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Award::Gold => "gold",
            Award::Silver => "silver",
            Award::Bronze => "bronze",
            Award::HonourableMention => "honourable_mention",
        }
    }

    /// Parses an award code, returning `None` for anything unrecognized.
    ///
    /// ```
    /// # use olydb_model::Award;
    /// assert_eq!(Award::from_code("honourable_mention"), Some(Award::HonourableMention));
    /// assert_eq!(Award::from_code("platinum"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Award::ALL.into_iter().find(|award| award.code() == code)
    }
}

impl FromStr for Award {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Award::from_code(s).ok_or_else(|| UnknownCodeError { code: s.to_owned() })
    }
}

/// Deserializes an optional award, mapping unknown codes to `None`.
pub(crate) fn deserialize_award_lenient<'de, D>(deserializer: D) -> Result<Option<Award>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(code) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if code.is_empty() {
        return Ok(None);
    }
    let award = Award::from_code(&code);
    if award.is_none() {
        tracing::warn!(code = %code, "ignoring unknown award code");
    }
    Ok(award)
}
