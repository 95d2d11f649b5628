mod format;
mod maths_utils;
mod perf;
mod time_utils;

pub use format::{LocaleFormat, MoneyFormat, percent};
pub use time_utils::AppInstant;

pub(crate) use maths_utils::{min_max_indices, padded_range};
