use colored::*;
use mapmark_common::config::Config;
use mapmark_common::success;
use mapmark_common::widget::MarkerId;
use mapmark_core::Map;
use mapmark_core::fake::RandomGenerator;
use mapmark_core::widget::headless::HeadlessMaps;

use super::{Population, populate};
use crate::mprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print};

/// Quiet level from which per-marker trees are hidden.
const HIDE_DETAILS_FROM: u8 = 2;

pub fn show(population: &Population, cfg: &Config) -> anyhow::Result<()> {
    let host = HeadlessMaps::with_regions([population.region.as_str()]);
    let mut map = Map::with_options(host, &population.region, population.map_options())?;
    let mut faker = RandomGenerator::from_seed(cfg.seed);

    let placed = populate(&mut map, population, &mut faker)?;
    if placed.is_empty() {
        print::header("zero markers placed", cfg.quiet);
        print::no_results();
        return Ok(());
    }
    success!("placed {} markers on {}", placed.len(), map.map_id());

    print::header("markers", cfg.quiet);
    for (idx, (marker, kind)) in placed.iter().enumerate() {
        let details = click_marker(&mut map, *marker)?;
        if shows_marker_details(cfg.quiet) {
            print::marker_tree(idx, &kind.to_string(), &details);
            if idx + 1 != placed.len() {
                mprint!();
            }
        }
    }
    map.api_mut().close_all();

    print_summary(&map, placed.len(), cfg);
    Ok(())
}

fn shows_marker_details(quiet: u8) -> bool {
    quiet < HIDE_DETAILS_FROM
}

/// Clicks `marker` and collects what the user would see.
fn click_marker(map: &mut Map<HeadlessMaps>, marker: MarkerId) -> anyhow::Result<Vec<Detail>> {
    let mut details = match map.api().marker_position(marker) {
        Some(position) => format::coordinate_to_key_value_pair(position),
        None => Vec::new(),
    };

    let opened = map.api_mut().click(marker)?;
    let popup = opened
        .last()
        .map(|open| format::markup_to_text(open.window.content()))
        .unwrap_or_default();
    details.push((String::from("popup"), popup.color(colors::CONTENT)));

    Ok(details)
}

fn print_summary(map: &Map<HeadlessMaps>, count: usize, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    let options = map.options();
    print::header("summary", cfg.quiet);
    print::summary(&[
        ("markers", count.to_string()),
        ("zoom", options.zoom.to_string()),
        ("center", options.center.to_string()),
    ]);
    print::end_of_program();
}
