//! User agent selection.
//!
//! Bing and Google serve reduced or empty result pages to agents they do not
//! recognise, so lookups default to a desktop browser string.

/// Agent sent when no user agent is configured.
pub const USER_AGENT: &str = "equipscout/0.1 (+equipment photo and spec sheet lookup)";

/// Config value selecting a browser user agent.
pub const IMPERSONATE: &str = "impersonate";

/// Desktop browser agents used in impersonate mode.
const BROWSER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:140.0) Gecko/20100101 Firefox/140.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36 Edg/138.0.0.0",
];

/// Pick a browser agent. The same `seed` always yields the same agent.
fn browser_agent(seed: usize) -> &'static str {
    BROWSER_AGENTS[seed % BROWSER_AGENTS.len()]
}

/// Seed from the clock so separate processes rotate agents.
fn clock_seed() -> usize {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as usize)
        .unwrap_or(0)
}

/// Turn the configured value into the header to send.
///
/// `None` gives [`USER_AGENT`], [`IMPERSONATE`] gives a browser agent, and
/// anything else is sent verbatim.
pub fn resolve_user_agent(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        None | Some("") => USER_AGENT.to_string(),
        Some(IMPERSONATE) => browser_agent(clock_seed()).to_string(),
        Some(custom) => custom.to_string(),
    }
}
