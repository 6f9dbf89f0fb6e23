//! Classify HTTP status and curl errors into fetch errors.

use crate::error::FetchError;

/// Coarse kind of a transport failure, used for the error reason and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransportKind {
    Timeout,
    Connection,
    Other,
}

pub(crate) fn classify_curl_error(e: &curl::Error) -> TransportKind {
    if e.is_operation_timedout() {
        return TransportKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportKind::Connection;
    }
    TransportKind::Other
}

/// Map a curl failure to `RemoteUnavailable`.
pub(crate) fn transport_error(url: &str, e: &curl::Error) -> FetchError {
    let reason = match classify_curl_error(e) {
        TransportKind::Timeout => format!("timed out: {}", e),
        TransportKind::Connection => format!("connection failed: {}", e),
        TransportKind::Other => e.to_string(),
    };
    FetchError::RemoteUnavailable {
        url: url.to_string(),
        reason,
    }
}

/// Map a response status to an error; `None` for 2xx.
pub(crate) fn classify_status(url: &str, code: u32) -> Option<FetchError> {
    match code {
        200..=299 => None,
        404 => Some(FetchError::ResourceNotFound {
            url: url.to_string(),
        }),
        _ => Some(FetchError::RemoteUnavailable {
            url: url.to_string(),
            reason: format!("HTTP {}", code),
        }),
    }
}
