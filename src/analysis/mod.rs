// Catalog search/pagination and chart shaping
pub mod catalog;
pub mod chart_series;
