// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session cookie construction and parsing.
//!
//! The session token travels in an `HttpOnly` cookie so page scripts never
//! see it. Values are JWTs (base64url segments joined by dots), which need
//! no escaping inside a cookie value.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_token";

/// `Set-Cookie` value installing a session token.
pub fn session_cookie(token: &str, max_age_secs: u64) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Pull the session token out of the request's `Cookie` header(s).
///
/// Returns `None` when no cookie header is present, the session cookie is
/// missing, or its value is empty.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            if name.trim() == SESSION_COOKIE {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn set_cookie_carries_the_token_and_attributes() {
        let cookie = session_cookie("abc.def.ghi", 2_592_000);
        assert_eq!(
            cookie,
            "session_token=abc.def.ghi; HttpOnly; SameSite=Lax; Path=/; Max-Age=2592000"
        );
    }

    #[test]
    fn clear_cookie_empties_the_value_and_zeroes_max_age() {
        assert_eq!(
            clear_session_cookie(),
            "session_token=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0"
        );
    }

    #[test]
    fn token_is_found_in_a_lone_cookie() {
        let headers = headers_with_cookie("session_token=abc.def.ghi");
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; session_token=abc.def.ghi; lang=en");
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn no_cookie_header_yields_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn unrelated_cookies_yield_none() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn empty_value_yields_none() {
        let headers = headers_with_cookie("session_token=");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn name_must_match_exactly() {
        let headers = headers_with_cookie("session_token_old=abc.def.ghi");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn second_cookie_header_is_searched_too() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(
            COOKIE,
            HeaderValue::from_static("session_token=abc.def.ghi"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }
}
