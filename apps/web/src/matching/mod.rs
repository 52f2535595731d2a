// Runner matching: pace/distance scoring and the matches page.

pub mod handlers;
pub mod scoring;
