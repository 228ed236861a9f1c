//! Full-page navigation helper.
//!
//! Login and logout deliberately use hard navigation instead of a soft
//! route transition: the next request must hit the server so the request
//! gate and SSR see the just-written (or just-cleared) cookies.

/// Navigate the whole page to `path`. No-op on the server.
pub fn force_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
