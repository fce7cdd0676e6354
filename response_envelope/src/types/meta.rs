use std::num::NonZeroUsize;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// Wire value meaning "no display limit".
const UNLIMITED: i64 = -1;

/// Default message attached to a failed envelope without one.
const UNKNOWN_ERROR: &str = "Unknown Error.";

/// Number of items shown per request, or per page when paginated.
///
/// Serialized as `-1` for [`DisplayLimit::Unlimited`] and as the plain
/// number otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayLimit {
    #[default]
    Unlimited,
    PerPage(NonZeroUsize),
}

impl DisplayLimit {
    /// Parses the wire form. Only `-1` and positive numbers are accepted.
    pub fn from_raw(limit: i64) -> Result<Self, Error> {
        if limit == UNLIMITED {
            return Ok(DisplayLimit::Unlimited);
        }
        usize::try_from(limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(DisplayLimit::PerPage)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "display limit must be a positive number or -1, got {}",
                    limit
                ))
            })
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            DisplayLimit::Unlimited => UNLIMITED,
            DisplayLimit::PerPage(n) => i64::try_from(n.get()).unwrap_or(i64::MAX),
        }
    }

    pub fn per_page(&self) -> Option<usize> {
        match self {
            DisplayLimit::Unlimited => None,
            DisplayLimit::PerPage(n) => Some(n.get()),
        }
    }
}

impl Serialize for DisplayLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_raw())
    }
}

impl<'de> Deserialize<'de> for DisplayLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        DisplayLimit::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub paginated: bool,
    pub total_pages: usize,
    /// Current page, `0` when the envelope is not paginated.
    pub page: usize,
}

impl Pagination {
    /// Metadata of a freshly paginated envelope: one page, positioned on it.
    pub fn first_page() -> Self {
        Self {
            paginated: true,
            total_pages: 1,
            page: 1,
        }
    }
}

/// Descriptor of a neighbouring page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    /// Number of items on that page.
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// The `results` block of an envelope.
///
/// `count` means different things depending on which axes are active:
/// the requested limit when only a limit is set, the size of the whole
/// dataset when paged with a limit, and the visible item count otherwise.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub count: usize,
    pub out_of_range: bool,
    pub display_limit: DisplayLimit,
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<PageLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<PageLink>,
}

/// Error details carried by an unsuccessful envelope.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: i64,
    pub message: String,
}

impl Default for ErrorBody {
    fn default() -> Self {
        Self {
            code: 0,
            message: UNKNOWN_ERROR.to_string(),
        }
    }
}

impl ErrorBody {
    pub fn new(code: i64, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }
}
