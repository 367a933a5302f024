use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Cookie carrying the admin session marker.
pub const ADMIN_SESSION_COOKIE: &str = "admin-session";

/// The single value the gate accepts as proof of authentication. Anything
/// else, including absence, is treated as unauthenticated.
pub const SESSION_AUTHENTICATED: &str = "authenticated";

/// Where denied requests are sent, with the original path attached.
pub const LOGIN_PATH: &str = "/login";
pub const CALLBACK_PARAM: &str = "callbackUrl";

/// Path prefixes requiring an authenticated session: the admin page
/// namespace and the admin API namespace. Checked in order as an explicit
/// list, not a pattern.
pub const PROTECTED_PREFIXES: [&str; 2] = ["/admin", "/api/admin"];

/// Outcome of a gate evaluation. Denial is a redirect, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(String),
}

/// Gate middleware over the whole router. Layered outside routing so that
/// unknown paths under the protected prefixes are still gated before the
/// fallback responds.
pub async fn admin_gate_middleware(headers: HeaderMap, request: Request, next: Next) -> Response {
    let decision = evaluate(request.uri().path(), cookie_header(&headers));

    match decision {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(target) => {
            tracing::debug!("unauthenticated admin request, redirecting to {}", target);
            Redirect::temporary(&target).into_response()
        }
    }
}

/// Decide whether a request may proceed, from its path and Cookie header
/// alone. Stateless; recomputed on every request.
pub fn evaluate(path: &str, cookie_header: Option<&str>) -> GateDecision {
    if !is_protected(path) {
        return GateDecision::Allow;
    }

    match cookie_header.and_then(session_cookie) {
        Some(SESSION_AUTHENTICATED) => GateDecision::Allow,
        _ => GateDecision::Redirect(login_redirect(path)),
    }
}

/// Exact-prefix match: `/admin` covers `/admin` and `/admin/...` but not
/// `/administrator` or paths that merely contain the substring.
fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .map_or(false, |rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Value of the admin session cookie, if present. Malformed pairs are
/// skipped, which reads as absence and therefore denial.
fn session_cookie(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name.trim() == ADMIN_SESSION_COOKIE {
            Some(value.trim())
        } else {
            None
        }
    })
}

/// Login redirect target carrying the original path verbatim, so the login
/// flow can return the user to the exact page requested.
fn login_redirect(path: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(CALLBACK_PARAM, path)
        .finish();
    format!("{}?{}", LOGIN_PATH, query)
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authed() -> Option<&'static str> {
        Some("admin-session=authenticated")
    }

    #[test]
    fn public_paths_bypass_the_gate_regardless_of_cookies() {
        assert_eq!(evaluate("/", None), GateDecision::Allow);
        assert_eq!(evaluate("/products", None), GateDecision::Allow);
        assert_eq!(evaluate("/api/products", Some("admin-session=expired")), GateDecision::Allow);
        assert_eq!(evaluate("/api/auth/login", None), GateDecision::Allow);
    }

    #[test]
    fn missing_cookie_redirects_with_callback() {
        assert_eq!(
            evaluate("/admin/dashboard", None),
            GateDecision::Redirect("/login?callbackUrl=%2Fadmin%2Fdashboard".to_string())
        );
    }

    #[test]
    fn wrong_value_is_denied_identically_to_absence() {
        let expected = evaluate("/api/admin/trainings/42", None);
        assert_eq!(
            evaluate("/api/admin/trainings/42", Some("admin-session=expired")),
            expected
        );
        assert_eq!(
            expected,
            GateDecision::Redirect(
                "/login?callbackUrl=%2Fapi%2Fadmin%2Ftrainings%2F42".to_string()
            )
        );
    }

    #[test]
    fn sentinel_value_is_allowed_through() {
        assert_eq!(evaluate("/admin/jobs/new", authed()), GateDecision::Allow);
        assert_eq!(evaluate("/api/admin/products", authed()), GateDecision::Allow);
    }

    #[test]
    fn sentinel_comparison_is_exact() {
        for value in ["Authenticated", "authenticated2", "AUTHENTICATED", ""] {
            let header = format!("admin-session={}", value);
            assert!(matches!(
                evaluate("/admin", Some(&header)),
                GateDecision::Redirect(_)
            ));
        }
    }

    #[test]
    fn prefix_match_is_segment_exact() {
        assert!(matches!(evaluate("/admin", None), GateDecision::Redirect(_)));
        assert!(matches!(evaluate("/admin/", None), GateDecision::Redirect(_)));
        assert!(matches!(evaluate("/api/admin/jobs", None), GateDecision::Redirect(_)));
        // Similar-looking but unrelated paths stay public
        assert_eq!(evaluate("/administrator", None), GateDecision::Allow);
        assert_eq!(evaluate("/api/administrators", None), GateDecision::Allow);
        assert_eq!(evaluate("/docs/admin", None), GateDecision::Allow);
    }

    #[test]
    fn callback_carries_the_full_sub_path() {
        assert_eq!(
            evaluate("/admin/trainings/new/schedule", None),
            GateDecision::Redirect(
                "/login?callbackUrl=%2Fadmin%2Ftrainings%2Fnew%2Fschedule".to_string()
            )
        );
    }

    #[test]
    fn session_cookie_is_found_among_other_cookies() {
        let header = "theme=dark; admin-session=authenticated; lang=en";
        assert_eq!(evaluate("/admin", Some(header)), GateDecision::Allow);

        let header = "theme=dark; lang=en";
        assert!(matches!(evaluate("/admin", Some(header)), GateDecision::Redirect(_)));
    }

    #[test]
    fn malformed_cookie_header_reads_as_absence() {
        for header in ["", "admin-session", "=authenticated", ";;;"] {
            assert!(matches!(
                evaluate("/admin", Some(header)),
                GateDecision::Redirect(_)
            ));
        }
    }
}
