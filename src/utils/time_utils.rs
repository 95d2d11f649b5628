/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;
