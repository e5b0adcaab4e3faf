use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use parking_lot::RwLock;
use tracing::{debug, trace};
use url::Url;
use zipline_core::{
    ClickRecord, Clock, Link, Result, ShortCode, Summary, SystemClock, ValidationError,
};
use zipline_events::{Event, EventSink};

use crate::events;
use crate::generator::{CodeGenerator, RandomGenerator};
use crate::store::LinkTable;

/// Validity period, in minutes, when a creation request leaves it
/// unspecified.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Attempts at drawing a fresh generated code before giving up.
const MAX_CODE_ATTEMPTS: usize = 32;

/// Parameters for creating a shortened link.
#[derive(Debug, Clone)]
pub struct CreateParams {
    /// The URL to shorten. Must be absolute, with a scheme and host.
    pub original_url: String,
    /// Minutes until the link expires; at least 1. Defaults to
    /// [`DEFAULT_VALIDITY_MINUTES`].
    pub validity_minutes: Option<i64>,
    /// Caller-chosen code instead of a generated one.
    pub custom_code: Option<String>,
}

impl CreateParams {
    /// Params with the default validity and a generated code.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            validity_minutes: None,
            custom_code: None,
        }
    }
}

/// Outcome of resolving a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code is live; redirect to the contained URL.
    Redirect(String),
    /// The code has never been issued.
    NotFound,
    /// The code exists but its validity period has passed.
    Expired,
}

/// Owns every shortened link and its lifecycle state.
///
/// One registry lives for the whole process; request handlers share it
/// behind an `Arc`. All reads and writes serialize on a single lock
/// around the link table. Links are never deleted, so a short code stays
/// occupied forever, expired or not.
pub struct LinkRegistry {
    table: RwLock<LinkTable>,
    generator: Box<dyn CodeGenerator>,
    clock: Box<dyn Clock>,
    events: Arc<dyn EventSink>,
}

impl LinkRegistry {
    /// A registry with random code generation and the system clock.
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self::with_parts(events, RandomGenerator, SystemClock)
    }

    /// A registry with explicit collaborators. Tests inject a scripted
    /// generator or a manual clock here.
    pub fn with_parts(
        events: Arc<dyn EventSink>,
        generator: impl CodeGenerator,
        clock: impl Clock,
    ) -> Self {
        Self {
            table: RwLock::new(LinkTable::new()),
            generator: Box::new(generator),
            clock: Box::new(clock),
            events,
        }
    }

    /// Validates the request, allocates a code, and stores the new link.
    ///
    /// Emits `URL_CREATED` on success and `VALIDATION_ERROR` on
    /// rejection; neither emission affects the returned result.
    pub fn create(&self, params: CreateParams) -> Result<Link> {
        let now = self.clock.now();
        match self.try_create(params, now) {
            Ok(link) => {
                debug!(shortcode = %link.shortcode, url = %link.original_url, "link created");
                self.emit(events::URL_CREATED, events::created(&link), now);
                Ok(link)
            }
            Err(error) => {
                debug!(error = %error, "link creation rejected");
                self.emit(events::VALIDATION_ERROR, events::validation_error(&error), now);
                Err(error)
            }
        }
    }

    fn try_create(&self, params: CreateParams, now: Timestamp) -> Result<Link> {
        validate_url(&params.original_url)?;
        let expiry_at = expiry_for(now, params.validity_minutes)?;
        let custom = params.custom_code.map(ShortCode::new).transpose()?;

        let mut table = self.table.write();
        let shortcode = match custom {
            Some(code) => {
                if table.contains(code.as_str()) {
                    return Err(ValidationError::ShortcodeTaken(code.as_str().to_owned()));
                }
                code
            }
            None => self.allocate_code(&table)?,
        };

        let link = Link {
            id: table.mint_id(),
            original_url: params.original_url,
            shortcode,
            created_at: now,
            expiry_at,
            clicks: 0,
            click_log: Vec::new(),
        };
        table.insert(link.clone());
        Ok(link)
    }

    /// Draws generated candidates until one is free.
    ///
    /// The caller holds the write lock on the table, so a free candidate
    /// stays free until it is inserted. Exhausting every attempt means
    /// the code space is effectively saturated.
    fn allocate_code(&self, table: &LinkTable) -> Result<ShortCode> {
        let mut candidate = self.generator.generate();
        let mut attempts = 1;
        while table.contains(candidate.as_str()) {
            if attempts >= MAX_CODE_ATTEMPTS {
                return Err(ValidationError::ShortcodeTaken(
                    candidate.as_str().to_owned(),
                ));
            }
            trace!(shortcode = %candidate, "generated code collided, retrying");
            candidate = self.generator.generate();
            attempts += 1;
        }
        Ok(candidate)
    }

    /// Looks up a code and records the click when the link is live.
    ///
    /// Unknown and expired codes mutate nothing. Every outcome emits its
    /// matching event.
    pub fn resolve(&self, code: &str, source: &str) -> Resolution {
        let now = self.clock.now();

        let (resolution, event_type, payload) = {
            let mut table = self.table.write();
            match table.get_mut(code) {
                None => (
                    Resolution::NotFound,
                    events::URL_NOT_FOUND,
                    events::missed(code),
                ),
                Some(link) if link.is_expired(now) => (
                    Resolution::Expired,
                    events::URL_EXPIRED,
                    events::missed(code),
                ),
                Some(link) => {
                    let click = ClickRecord {
                        timestamp: now,
                        source: source.to_owned(),
                    };
                    link.click_log.push(click.clone());
                    link.clicks += 1;
                    let payload = events::clicked(link, &click);
                    (
                        Resolution::Redirect(link.original_url.clone()),
                        events::URL_CLICKED,
                        payload,
                    )
                }
            }
        };

        match &resolution {
            Resolution::Redirect(url) => debug!(shortcode = %code, url = %url, "resolved short code"),
            Resolution::Expired => debug!(shortcode = %code, "short code has expired"),
            Resolution::NotFound => trace!(shortcode = %code, "short code not found"),
        }
        self.emit(event_type, payload, now);
        resolution
    }

    /// Snapshot of every link, in creation order.
    pub fn list(&self) -> Vec<Link> {
        self.table.read().iter().cloned().collect()
    }

    /// Aggregate counts, derived fresh from the table on every call.
    pub fn summary(&self) -> Summary {
        let now = self.clock.now();
        let table = self.table.read();

        let mut summary = Summary {
            total_links: table.len(),
            total_clicks: 0,
            active_links: 0,
        };
        for link in table.iter() {
            summary.total_clicks += link.clicks;
            if link.is_active(now) {
                summary.active_links += 1;
            }
        }
        summary
    }

    /// Best-effort emission: a sink failure is logged and dropped, never
    /// surfaced to the caller.
    fn emit(&self, event_type: &str, payload: serde_json::Value, timestamp: Timestamp) {
        let event = Event::at(event_type, payload, timestamp);
        if let Err(error) = self.events.emit(event) {
            debug!(event_type, error = %error, "event sink rejected event");
        }
    }
}

/// A shortenable URL is absolute: it parses and names a host.
fn validate_url(raw: &str) -> Result<()> {
    let parsed =
        Url::parse(raw).map_err(|error| ValidationError::InvalidUrl(format!("{raw}: {error}")))?;
    if !parsed.has_host() {
        return Err(ValidationError::InvalidUrl(format!("{raw}: no host")));
    }
    Ok(())
}

/// Expiry instant for a validity period, rejecting periods below one
/// minute or past the representable range.
fn expiry_for(now: Timestamp, validity_minutes: Option<i64>) -> Result<Timestamp> {
    let minutes = validity_minutes.unwrap_or(DEFAULT_VALIDITY_MINUTES);
    if minutes < 1 {
        return Err(ValidationError::InvalidValidity(minutes));
    }
    let seconds = minutes
        .checked_mul(60)
        .ok_or(ValidationError::InvalidValidity(minutes))?;
    now.checked_add(SignedDuration::from_secs(seconds))
        .map_err(|_| ValidationError::InvalidValidity(minutes))
}
