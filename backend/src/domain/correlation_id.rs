//! Request-scoped correlation identifier for tying logs and errors together.
//!
//! A `CorrelationId` follows a request through the system. Callers may supply
//! one through the `correlation-id` header; otherwise a UUID is generated. The
//! current identifier lives in task-local storage so it is available without
//! explicit parameter threading.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`CorrelationId::scope`] when spawning new tasks so the active identifier
//! propagates.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Header carrying the correlation identifier on requests and responses.
pub const CORRELATION_ID_HEADER: &str = "correlation-id";

/// Upper bound on caller-supplied identifiers.
pub const MAX_CORRELATION_ID_LEN: usize = 128;

task_local! {
    /// Task-local storage for the current correlation identifier.
    pub(crate) static CORRELATION_ID: CorrelationId;
}

/// Rejection reasons for caller-supplied correlation identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrelationIdError {
    /// The value is empty once trimmed.
    #[error("correlation id must not be empty")]
    Empty,
    /// The value exceeds [`MAX_CORRELATION_ID_LEN`] bytes.
    #[error("correlation id must be at most {max} bytes")]
    TooLong {
        /// Maximum permitted length.
        max: usize,
    },
    /// The value contains characters outside visible ASCII.
    #[error("correlation id must contain visible ASCII characters only")]
    InvalidCharacters,
}

/// Per-request correlation identifier exposed via task-local storage.
///
/// # Examples
/// ```
/// use food_orders::domain::CorrelationId;
///
/// async fn handler() {
///     if let Some(id) = CorrelationId::current() {
///         println!("correlation id: {id}");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a new random correlation identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Validate a caller-supplied identifier.
    ///
    /// # Examples
    /// ```
    /// use food_orders::domain::{CorrelationId, CorrelationIdError};
    ///
    /// let id = CorrelationId::parse("req-42").expect("valid id");
    /// assert_eq!(id.as_str(), "req-42");
    /// assert_eq!(CorrelationId::parse("  "), Err(CorrelationIdError::Empty));
    /// ```
    pub fn parse(value: &str) -> Result<Self, CorrelationIdError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CorrelationIdError::Empty);
        }
        if trimmed.len() > MAX_CORRELATION_ID_LEN {
            return Err(CorrelationIdError::TooLong {
                max: MAX_CORRELATION_ID_LEN,
            });
        }
        if !trimmed.chars().all(|c| c.is_ascii_graphic()) {
            return Err(CorrelationIdError::InvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the current correlation identifier if one is in scope.
    #[must_use]
    pub fn current() -> Option<Self> {
        CORRELATION_ID.try_with(Clone::clone).ok()
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Execute the provided future with the supplied identifier in scope.
    ///
    /// # Examples
    /// ```
    /// use food_orders::domain::CorrelationId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = CorrelationId::parse("req-42").expect("valid id");
    /// let observed = CorrelationId::scope(id.clone(), async { CorrelationId::current() }).await;
    /// assert_eq!(observed, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(correlation_id: CorrelationId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CORRELATION_ID.scope(correlation_id, fut).await
    }

    /// Run a synchronous closure with the supplied identifier in scope.
    pub fn sync_scope<F, R>(correlation_id: CorrelationId, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CORRELATION_ID.sync_scope(correlation_id, f)
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
