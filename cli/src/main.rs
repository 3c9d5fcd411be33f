mod commands;
mod terminal;

use commands::{CommandLine, Commands, render, show};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Show { population } => {
            print::header("placing markers", cfg.quiet);
            show::show(&population, &cfg)
        }
        Commands::Render {
            population,
            output,
            title,
        } => {
            print::header("rendering page", cfg.quiet);
            render::render(&population, &output, &title, &cfg)
        }
    }
}
