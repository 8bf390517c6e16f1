//! Runs A* on the bundled maze catalog and prints an evaluation report.
//!
//! Run: cargo run --bin astar-maze -- [map-id [start-row start-col goal-row goal-col]]
//!
//! With no arguments every map is evaluated from its default start to its
//! default goal. Set `GRIDSTAR_MAPS` to read another catalog and `RUST_LOG`
//! to see the search log.

use gridstar_core::Coord;
use gridstar_demos::{Catalog, DemoError, Evaluation, parse_component};

const USAGE: &str = "usage: astar-maze [map-id [start-row start-col goal-row goal-col]]";

fn main() {
    env_logger::init();

    if let Err(e) = run(std::env::args().skip(1).collect()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), DemoError> {
    let catalog = Catalog::load_default()?;
    let finder = catalog.finder();

    let queries: Vec<_> = match args.as_slice() {
        [] => catalog.maps.iter().map(|m| (m, m.start, m.goal)).collect(),
        [id] => {
            let m = catalog.get(parse_id(id)?)?;
            vec![(m, m.start, m.goal)]
        }
        [id, sr, sc, gr, gc] => {
            let m = catalog.get(parse_id(id)?)?;
            let start = Coord::new(parse_component(sr)?, parse_component(sc)?);
            let goal = Coord::new(parse_component(gr)?, parse_component(gc)?);
            vec![(m, start, goal)]
        }
        _ => return Err(DemoError::Usage(USAGE.to_owned())),
    };

    for (i, (map, start, goal)) in queries.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let eval = Evaluation::run(&finder, map, start, goal)?;
        print!("{eval}");
        print!("{}", eval.render());
    }
    Ok(())
}

fn parse_id(arg: &str) -> Result<u32, DemoError> {
    arg.parse()
        .map_err(|_| DemoError::Usage(format!("not a map id: {arg:?}\n{USAGE}")))
}
