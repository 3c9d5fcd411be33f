pub mod render;
pub mod show;

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{ArgAction, Args, Parser, Subcommand};
use mapmark_common::config::{Config, MapOptions};
use mapmark_common::generator::DataGenerator;
use mapmark_common::geo::Coordinate;
use mapmark_common::widget::{MapsApi, MarkerId};
use mapmark_core::Map;
use mapmark_core::entities::{Company, User};

#[derive(Parser)]
#[command(name = "mapmark")]
#[command(about = "Place generated companies and users on a map.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq hides marker details)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Place markers on an in-memory map and click each of them
    #[command(alias = "s")]
    Show {
        #[command(flatten)]
        population: Population,
    },
    /// Write the map to a standalone HTML page
    #[command(alias = "r")]
    Render {
        #[command(flatten)]
        population: Population,
        /// Where to write the page
        #[arg(short, long, default_value = "map.html")]
        output: PathBuf,
        /// Page title
        #[arg(long, default_value = "mapmark")]
        title: String,
    },
}

/// What to put on the map and how to frame it.
#[derive(Args, Clone)]
pub struct Population {
    /// Number of generated companies
    #[arg(short, long, default_value_t = 1)]
    pub companies: usize,
    /// Number of generated users
    #[arg(short, long, default_value_t = 1)]
    pub users: usize,
    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Initial zoom level
    #[arg(short, long, default_value_t = 2)]
    pub zoom: u8,
    /// Initial centre as "lat,lng"
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    pub center: Coordinate,
    /// Id of the display region the map is bound to
    #[arg(long, default_value = "map")]
    pub region: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let seed = match &self.command {
            Commands::Show { population } | Commands::Render { population, .. } => {
                population.seed
            }
        };
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            seed,
        }
    }
}

impl Population {
    pub fn map_options(&self) -> MapOptions {
        MapOptions::new(self.zoom, self.center)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Company,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Company => write!(f, "Company"),
            EntityKind::User => write!(f, "User"),
        }
    }
}

/// Generates the requested entities and places a marker for each, companies first.
pub fn populate<A: MapsApi>(
    map: &mut Map<A>,
    population: &Population,
    faker: &mut dyn DataGenerator,
) -> anyhow::Result<Vec<(MarkerId, EntityKind)>> {
    let mut placed = Vec::with_capacity(population.companies + population.users);

    for _ in 0..population.companies {
        let company = Rc::new(Company::generate(&mut *faker)?);
        placed.push((map.add_marker(company)?, EntityKind::Company));
    }

    for _ in 0..population.users {
        let user = Rc::new(User::generate(&mut *faker)?);
        placed.push((map.add_marker(user)?, EntityKind::User));
    }

    Ok(placed)
}
