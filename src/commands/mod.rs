use crate::cli;
use appicons_core::{config::Config, converter::Locator};
use term_grid::{Cell, Direction, Filling, Grid, GridOptions};

mod generate;

pub use generate::generate;

pub fn list(config: &Config, args: cli::list::Cli) -> eyre::Result<()> {
    let targets = config.targets().for_platforms(&args.platforms);

    let mut grid = Grid::new(GridOptions {
        direction: Direction::LeftToRight,
        filling: Filling::Spaces(2),
    });
    for target in &targets {
        grid.add(Cell::from(target.platform().to_string()));
        grid.add(Cell::from(format!("{}x{}", target.size, target.size)));
        grid.add(Cell::from(target.path.display().to_string()));
    }

    print!("{}", grid.fit_into_columns(3));
    println!("{} icons from {}", targets.len(), config.source().display());
    Ok(())
}

pub fn locate(locator: &Locator) -> eyre::Result<()> {
    match locator.locate() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(eyre::eyre!(
            "Inkscape not found, install it from https://inkscape.org or pass --inkscape-binary"
        )),
    }
}
