//! User-facing error text

use crate::error::FetchError;

/// Format the message shown in the temperature label for a failed fetch.
pub fn error_message(err: &FetchError) -> String {
    match err {
        FetchError::LocationUnavailable => "Konum alınamadı.".to_string(),
        FetchError::Location(detail) => format!("Konum hatası:\n{detail}"),
        FetchError::CityNotFound => "Şehir bulunamadı.".to_string(),
        FetchError::Status { code, detail } => status_message(*code, detail),
        FetchError::Connection => "Connection Error:\nCheck your internet connection".to_string(),
        FetchError::Timeout => "Timeout Error:\nThe request timed out".to_string(),
        FetchError::TooManyRedirects => "Too many Redirects:\nCheck your URL".to_string(),
        FetchError::Request(detail) => format!("Request Error:\n{detail}"),
    }
}

fn status_message(code: u16, detail: &str) -> String {
    let fixed = match code {
        400 => "Bad request:\nPlease check your input",
        401 => "Unauthorized:\nInvalid API key",
        403 => "Forbidden:\nAccess is denied",
        404 => "Not found:\nCity not found",
        500 => "Internal Server Error:\nPlease try again later",
        502 => "Bad Gateway:\nInvalid response from the server",
        503 => "Service Unavailable:\nServer is down",
        504 => "Gateway Timeout:\nNo response from the server",
        _ => return format!("HTTP error occurred:\n{detail}"),
    };
    fixed.to_string()
}
