//! Builds an envelope from command-line flags.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use response_envelope::{Envelope, EnvelopeOptions, Payload};
use serde_json::Value;

#[derive(Args, Debug)]
pub struct WrapArgs {
    /// Enable pagination (starts on page 1)
    #[arg(long)]
    pub paginate: bool,

    /// Items per request, or per page when paginated (-1 for no limit)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Page to show (requires --paginate)
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// URI template for neighbouring pages; ?? marks the page number
    #[arg(long, default_value = "")]
    pub base_uri: String,

    /// First item (zero-based, inclusive) of the range kept from the data
    #[arg(long)]
    pub field_start: Option<usize>,

    /// End (zero-based, exclusive) of the range kept from the data
    #[arg(long)]
    pub field_end: Option<usize>,

    /// HTTP status code of the response
    #[arg(long, default_value = "200")]
    pub status: u16,

    /// Mark the response as failed
    #[arg(long)]
    pub failure: bool,

    /// Error code attached to a failed response
    #[arg(long)]
    pub error_code: Option<i64>,

    /// Error message attached to a failed response
    #[arg(long)]
    pub error_message: Option<String>,

    /// Last update time (RFC 3339, e.g. 2024-03-01T12:00:00Z)
    #[arg(long)]
    pub updated_time: Option<String>,
}

/// Wraps `value` and applies the field range, display limit and page, in
/// that order.
pub fn build_envelope(args: &WrapArgs, value: Value, diagnostics: bool) -> Result<Envelope<Value>> {
    let mut options = EnvelopeOptions::default()
        .with_paginate(args.paginate)
        .with_diagnostics(diagnostics);
    if let Some(raw) = &args.updated_time {
        options = options.with_updated_time(parse_time(raw)?);
    }
    if let Some(code) = args.error_code {
        options = options.with_error_code(code);
    }
    if let Some(message) = &args.error_message {
        options = options.with_error_message(message);
    }

    let mut envelope = Envelope::new(
        Payload::from_json(value),
        !args.failure,
        args.status,
        options,
    );

    if args.field_start.is_some() || args.field_end.is_some() {
        let start = args.field_start.unwrap_or(0);
        let narrowed = match args.field_end {
            Some(end) => envelope.limit_field(start..end),
            None => envelope.limit_field(start..),
        };
        narrowed.context("--field-start/--field-end")?;
    }
    if let Some(limit) = args.limit {
        envelope.set_display_limit(limit).context("--limit")?;
    }
    if let Some(page) = args.page {
        envelope
            .set_page(page, &args.base_uri)
            .context("--page")?;
    }

    Ok(envelope)
}

fn parse_time(raw: &str) -> Result<DateTime<Utc>> {
    let time = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid --updated-time {:?}, expected RFC 3339", raw))?;
    Ok(time.with_timezone(&Utc))
}
