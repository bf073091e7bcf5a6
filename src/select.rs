//! Filter & sample: pick a random handful of matching registrations.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{FilterConfig, Registration};

/// Filter by meal and menu type, shuffle, format and truncate to `config.count`.
pub fn select(data: &[Registration], config: &FilterConfig, link_base: &str) -> Vec<String> {
    select_with_rng(data, config, link_base, &mut rand::thread_rng())
}

/// As [`select`], with a caller-supplied RNG.
pub fn select_with_rng<R: Rng + ?Sized>(
    data: &[Registration],
    config: &FilterConfig,
    link_base: &str,
    rng: &mut R,
) -> Vec<String> {
    if data.is_empty() {
        return Vec::new();
    }

    let period_ids = config.meal.period_ids();
    let mut matching: Vec<&Registration> = data
        .iter()
        .filter(|r| r.offers_any_period(period_ids))
        .filter(|r| config.accepts_menu_type(r.menu_type.id))
        .collect();

    // Fisher-Yates.
    matching.shuffle(rng);

    matching
        .into_iter()
        .take(config.count)
        .map(|r| r.display_line(link_base))
        .collect()
}
