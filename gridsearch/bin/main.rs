use gridsearch::{util::parse_grid, Algorithm, Movement, Phase, Session};
use log::info;

const MAZE: &str = "
    ####################
    #S.....#...........#
    #.####.#.#######.#.#
    #.#....#.#.....#.#.#
    #.#.####.#.###.#.#.#
    #.#......#.#...#.#.#
    #.########.#.###.#.#
    #..........#.....#E#
    ####################
";

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let algorithm: Algorithm = match args.next() {
        Some(arg) => arg.parse()?,
        None => Algorithm::default(),
    };
    let movement: Movement = match args.next() {
        Some(arg) => arg.parse()?,
        None => Movement::default(),
    };

    let mut session = Session::new(parse_grid(MAZE)?);
    println!("{}", session.snapshot());

    session.start_search(algorithm, movement)?;
    let events = session.run_to_end();
    info!("search ended after {} events", events.len());

    println!("{}", session.snapshot());
    if let Some(stats) = session.stats() {
        println!(
            "{} ({}): {} steps, {} expanded, {} discovered, peak frontier {}",
            algorithm,
            movement,
            stats.steps,
            stats.expanded,
            stats.discovered,
            stats.peak_frontier
        );
    }

    match (session.phase(), session.result()) {
        (Phase::Found, Some(result)) => println!(
            "path of {} steps, cost {}",
            result.steps(),
            result.total_cost
        ),
        _ => println!("no path"),
    }

    Ok(())
}
