use slots_core::{GameConfig, Machine, SessionRng};

fn main() -> Result<(), slots_core::EngineError> {
    // One seeded spin with the default machine
    let machine = Machine::new(GameConfig::default_3x3())?;
    let mut rng = SessionRng::from_seed(2024);
    let grid = machine.spin(&mut rng)?;
    let outcome = machine.settle(&grid, 10);
    print!("{grid}");
    println!(
        "seed={} lines={:?} total_win={}",
        rng.seed, outcome.line_wins, outcome.total_win
    );
    Ok(())
}
