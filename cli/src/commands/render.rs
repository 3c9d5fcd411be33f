use std::fs;
use std::path::Path;

use anyhow::Context;
use mapmark_common::config::Config;
use mapmark_common::success;
use mapmark_core::Map;
use mapmark_core::fake::RandomGenerator;
use mapmark_core::widget::html::HtmlMaps;
use tracing::warn;

use super::{Population, populate};
use crate::terminal::print;

pub fn render(population: &Population, output: &Path, title: &str, cfg: &Config) -> anyhow::Result<()> {
    let page = HtmlMaps::new(title).with_region(population.region.as_str());
    let mut map = Map::with_options(page, &population.region, population.map_options())?;
    let mut faker = RandomGenerator::from_seed(cfg.seed);

    let placed = populate(&mut map, population, &mut faker)?;
    if placed.is_empty() {
        warn!("no markers requested, writing an empty map");
    }

    let html = map.into_api().render();
    fs::write(output, &html)
        .with_context(|| format!("failed to write page to {}", output.display()))?;
    success!("wrote {} markers to {}", placed.len(), output.display());

    if cfg.quiet == 0 {
        print::header("summary", cfg.quiet);
        print::summary(&[
            ("markers", placed.len().to_string()),
            ("output", output.display().to_string()),
            ("bytes", html.len().to_string()),
        ]);
        print::end_of_program();
    }
    Ok(())
}
