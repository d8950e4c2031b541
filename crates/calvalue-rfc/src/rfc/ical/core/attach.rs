//! Shared attachment handle used by ATTACH and BINARY values.

use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::rfc::ical::parse::{ParseError, ParseErrorKind, ParseResult};

/// Callback receiving inline data once the last handle to it is gone.
pub type ReleaseFn = Box<dyn FnOnce(Vec<u8>) + Send + Sync>;

enum Payload {
    Url(String),
    Inline {
        data: Vec<u8>,
        on_release: Option<ReleaseFn>,
    },
}

struct Inner {
    payload: Payload,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Payload::Inline { data, on_release } = &mut self.payload
            && let Some(release) = on_release.take()
        {
            tracing::trace!(len = data.len(), "Releasing inline attachment data");
            release(std::mem::take(data));
        }
    }
}

/// Reference-counted handle to a URL or an inline blob.
///
/// Cloning shares the backing data. Inline data registered with
/// [`Attachment::from_data_with_release`] is handed to its callback exactly
/// once, when the last clone is dropped.
#[derive(Clone)]
pub struct Attachment {
    inner: Arc<Inner>,
}

impl Attachment {
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::with_payload(Payload::Url(url.into()))
    }

    #[must_use]
    pub fn from_data(data: impl Into<Vec<u8>>) -> Self {
        Self::with_payload(Payload::Inline {
            data: data.into(),
            on_release: None,
        })
    }

    /// Inline data with a callback run when the last handle is dropped.
    #[must_use]
    pub fn from_data_with_release(
        data: impl Into<Vec<u8>>,
        on_release: impl FnOnce(Vec<u8>) + Send + Sync + 'static,
    ) -> Self {
        Self::with_payload(Payload::Inline {
            data: data.into(),
            on_release: Some(Box::new(on_release)),
        })
    }

    fn with_payload(payload: Payload) -> Self {
        Self {
            inner: Arc::new(Inner { payload }),
        }
    }

    #[must_use]
    pub fn is_url(&self) -> bool {
        matches!(self.inner.payload, Payload::Url(_))
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.inner.payload {
            Payload::Url(url) => Some(url),
            Payload::Inline { .. } => None,
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&[u8]> {
        match &self.inner.payload {
            Payload::Inline { data, .. } => Some(data),
            Payload::Url(_) => None,
        }
    }

    /// Number of live handles sharing this attachment.
    #[must_use]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Returns whether both handles share the same backing data.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Decodes inline data carried with `ENCODING=BASE64`.
    ///
    /// ## Errors
    /// Returns `InvalidAttachment` for URL attachments and for data that is
    /// not valid base64.
    pub fn decode_base64(&self) -> ParseResult<Vec<u8>> {
        let data = self.data().ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidAttachment, self.url().unwrap_or_default())
                .with_context("attachment is a URL reference")
        })?;
        STANDARD.decode(data).map_err(|e| {
            ParseError::new(
                ParseErrorKind::InvalidAttachment,
                String::from_utf8_lossy(data),
            )
            .with_context(e.to_string())
        })
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.payload {
            Payload::Url(url) => f.debug_tuple("Attachment::Url").field(url).finish(),
            Payload::Inline { data, .. } => f
                .debug_struct("Attachment::Inline")
                .field("len", &data.len())
                .field("ref_count", &self.ref_count())
                .finish(),
        }
    }
}
