//! Nearest-yarn matching between extracted colors and the stash.

use crate::models::{ColorMatch, RgbColor, YarnRecord};

/// Matches each source color to its nearest stash yarn.
///
/// Every source color is scanned independently against the whole catalog;
/// the first yarn achieving the minimum distance wins, so ties resolve in
/// stash order. The combined result is sorted ascending by distance across
/// all matches: the best matches surface first, source order is not
/// preserved. With an empty stash the result is empty.
#[must_use]
pub fn match_colors_to_yarn(sources: &[RgbColor], stash: &[YarnRecord]) -> Vec<ColorMatch> {
    let mut matches: Vec<ColorMatch> = Vec::with_capacity(sources.len());

    for source in sources {
        let mut best: Option<(&YarnRecord, f64)> = None;

        for yarn in stash {
            let distance = source.distance(&yarn.color);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((yarn, distance)),
            }
        }

        if let Some((yarn, distance)) = best {
            matches.push(ColorMatch {
                source: *source,
                yarn: yarn.clone(),
                distance,
            });
        }
    }

    // Stable sort keeps source order for equal distances
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    matches
}
