//! Pure view model for the results page. Building a view never calls the
//! backend and never mutates the analysis result.

pub mod banner;
pub mod dashboard;
pub mod expandable;

pub use banner::{BannerCopy, MatchBanner};
pub use dashboard::DashboardView;
pub use expandable::{ExpandableList, INITIAL_VISIBLE, READ_MORE, SHOW_LESS};
