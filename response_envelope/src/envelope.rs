//! The response envelope and its chainable configuration operations.

use std::ops::RangeBounds;

use serde::Serialize;

use crate::{
    options::EnvelopeOptions,
    types::{DisplayLimit, ErrorBody, Pagination, Payload, Results},
    window::{self, PAGE_PLACEHOLDER},
    Error,
};

/// An API response: status, payload and the metadata of the visible window.
///
/// The envelope owns its data. Every configuration call recomputes `data`
/// and `results` from the full dataset, the current page, the display limit
/// and the base URI, so calls may come in any order and repeating one is a
/// no-op.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    success: bool,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
    data: Payload<T>,
    results: Results,

    /// Dataset the window is taken from. `None` for non-sequence payloads.
    #[serde(skip)]
    full_data: Option<Vec<T>>,
    /// `None` until pagination is enabled.
    #[serde(skip)]
    page: Option<usize>,
    #[serde(skip)]
    limit: DisplayLimit,
    #[serde(skip)]
    base_uri: String,
    #[serde(skip)]
    diagnostics: bool,
}

impl<T: Clone> Envelope<T> {
    pub fn new(
        data: impl Into<Payload<T>>,
        success: bool,
        status: u16,
        options: EnvelopeOptions,
    ) -> Self {
        let data = data.into();
        let mut results = Results {
            count: data.len(),
            ..Results::default()
        };
        let page = if options.paginate {
            results.pagination = Pagination::first_page();
            Some(1)
        } else {
            None
        };

        let envelope = Self {
            success,
            status,
            updated_time: options.updated_time_json(),
            error: (!success).then(|| options.error_body()),
            full_data: data.as_slice().map(<[T]>::to_vec),
            data,
            results,
            page,
            limit: DisplayLimit::Unlimited,
            base_uri: String::new(),
            diagnostics: options.diagnostics,
        };
        envelope.trace("new");
        envelope
    }

    /// A successful `200` envelope with default options.
    pub fn ok(data: impl Into<Payload<T>>) -> Self {
        Self::new(data, true, 200, EnvelopeOptions::default())
    }

    /// A failed envelope without data.
    pub fn failure(status: u16, error: ErrorBody) -> Self {
        Self::new(
            Payload::Empty,
            false,
            status,
            EnvelopeOptions::default().with_error(error),
        )
    }

    /// Limits the number of visible items, per page when paginated.
    /// `-1` removes the limit.
    pub fn set_display_limit(&mut self, limit: i64) -> Result<&mut Self, Error> {
        self.require_sequence("set_display_limit")?;
        self.limit = DisplayLimit::from_raw(limit).map_err(reject)?;
        self.refresh("set_display_limit");
        Ok(self)
    }

    /// Same as `set_display_limit(-1)`.
    pub fn clear_display_limit(&mut self) -> Result<&mut Self, Error> {
        self.set_display_limit(-1)
    }

    /// Moves the window to `page` (1-indexed).
    ///
    /// A non-empty `base_uri` must contain [`PAGE_PLACEHOLDER`]; it is used to
    /// build the `uri` of the previous and next page descriptors.
    pub fn set_page(&mut self, page: i64, base_uri: &str) -> Result<&mut Self, Error> {
        self.require_sequence("set_page")?;
        if self.page.is_none() {
            return Err(reject(Error::InvalidState(
                "envelope is not set to paginated".to_string(),
            )));
        }
        let page = usize::try_from(page)
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| {
                reject(Error::InvalidArgument(format!(
                    "page number must be a positive number, got {}",
                    page
                )))
            })?;
        if !base_uri.is_empty() && !base_uri.contains(PAGE_PLACEHOLDER) {
            return Err(reject(Error::InvalidArgument(format!(
                "base URI must contain {} to mark the page number, got {:?}",
                PAGE_PLACEHOLDER, base_uri
            ))));
        }

        self.page = Some(page);
        self.base_uri = base_uri.to_string();
        self.refresh("set_page");
        Ok(self)
    }

    /// Permanently narrows the dataset to `range`.
    ///
    /// Bounds are clamped to the dataset and an inverted range leaves it
    /// empty. Later paging and limiting only see the narrowed items.
    /// Indices always count from the start; there are no negative offsets.
    pub fn limit_field(&mut self, range: impl RangeBounds<usize>) -> Result<&mut Self, Error> {
        self.require_sequence("limit_field")?;
        if let Some(full) = self.full_data.as_mut() {
            let keep = window::clamp_range(range, full.len());
            full.truncate(keep.end);
            full.drain(..keep.start);
        }
        self.refresh("limit_field");
        Ok(self)
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn updated_time(&self) -> Option<&str> {
        self.updated_time.as_deref()
    }

    pub fn error(&self) -> Option<&ErrorBody> {
        self.error.as_ref()
    }

    /// The currently visible data.
    pub fn data(&self) -> &Payload<T> {
        &self.data
    }

    pub fn results(&self) -> &Results {
        &self.results
    }

    /// The dataset windows are computed over, after any `limit_field`.
    pub fn full_data(&self) -> Option<&[T]> {
        self.full_data.as_deref()
    }

    /// Current page, `None` when not paginated.
    pub fn page(&self) -> Option<usize> {
        self.page
    }

    pub fn display_limit(&self) -> DisplayLimit {
        self.limit
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn require_sequence(&self, operation: &str) -> Result<(), Error> {
        if self.full_data.is_some() {
            return Ok(());
        }
        Err(reject(Error::InvalidState(format!(
            "{} is only applicable to sequence data",
            operation
        ))))
    }

    fn refresh(&mut self, operation: &'static str) {
        if let Some(full) = &self.full_data {
            if self.diagnostics {
                tracing::trace!(operation, "results reset");
            }
            let (visible, results) = window::compute(full, self.page, self.limit, &self.base_uri);
            self.data = Payload::Sequence(visible);
            self.results = results;
        }
        self.trace(operation);
    }

    fn trace(&self, operation: &'static str) {
        if !self.diagnostics {
            return;
        }
        tracing::debug!(
            operation,
            success = self.success,
            status = self.status,
            page = self.results.pagination.page,
            total_pages = self.results.pagination.total_pages,
            display_limit = self.limit.as_raw(),
            count = self.results.count,
            out_of_range = self.results.out_of_range,
            has_previous = self.results.previous_page.is_some(),
            has_next = self.results.next_page.is_some(),
            "envelope updated"
        );
    }
}

fn reject(error: Error) -> Error {
    tracing::warn!("envelope operation rejected: {}", error);
    error
}
