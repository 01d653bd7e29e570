use slots_core::{
    evaluate, sample_indices, GameConfig, Machine, Paytable, Session, SessionRng, Symbol,
    SymbolTable,
};
use std::io::Cursor;

#[test]
fn rng_repeatable() {
    let machine = Machine::new(GameConfig::default_3x3()).unwrap();
    let mut rng1 = SessionRng::from_seed(42);
    let mut rng2 = SessionRng::from_seed(42);
    for _ in 0..10 {
        assert_eq!(machine.spin(&mut rng1).unwrap(), machine.spin(&mut rng2).unwrap());
    }
}

#[test]
fn grid_cells_come_from_pool() {
    let config = GameConfig {
        symbols: SymbolTable::new([(Symbol::B, 2), (Symbol::D, 5)]),
        rows: 4,
        cols: 6,
        ..GameConfig::default_3x3()
    };
    let machine = Machine::new(config).unwrap();
    let mut rng = SessionRng::from_seed(8);
    for _ in 0..100 {
        let grid = machine.spin(&mut rng).unwrap();
        assert_eq!(grid.row_count(), 4);
        for row in grid.rows() {
            assert_eq!(row.len(), 6);
            assert!(row.iter().all(|s| matches!(s, Symbol::B | Symbol::D)));
        }
    }
}

#[test]
fn rows_equal_to_pool_uses_every_index() {
    let mut rng = SessionRng::from_seed(11);
    let window = sample_indices(&mut rng, 3, 3, 2).unwrap();
    for col in 0..2 {
        let mut column: Vec<usize> = window.iter().map(|r| r[col]).collect();
        column.sort_unstable();
        assert_eq!(column, vec![0, 1, 2]);
    }
}

#[test]
fn payouts_only_for_uniform_rows() {
    let machine = Machine::new(GameConfig::default_3x3()).unwrap();
    let paytable = Paytable::simple_default();
    let mut rng = SessionRng::from_seed(17);
    for _ in 0..500 {
        let grid = machine.spin(&mut rng).unwrap();
        let lines = evaluate(&grid, &paytable);
        assert_eq!(lines.len(), grid.row_count());
        for (row, m) in grid.rows().iter().zip(&lines) {
            if *m > 0 {
                assert!(row.iter().all(|s| *s == row[0]));
                assert_eq!(*m, paytable.multiplier(row[0]));
            }
        }
    }
}

#[test]
fn rtp_simulation_smoke() {
    let machine = Machine::new(GameConfig::default_3x3()).unwrap();
    let mut rng = SessionRng::from_seed(7);
    let mut total_bet = 0u64;
    let mut total_payout = 0u64;
    for _ in 0..1000 {
        let grid = machine.spin(&mut rng).unwrap();
        total_bet += 1;
        total_payout += machine.settle(&grid, 1).total_win;
    }
    let rtp = total_payout as f64 / total_bet as f64;
    // very loose bounds, a row pays at most 20x
    assert!((0.0..=60.0).contains(&rtp));
}

#[test]
fn session_with_default_machine_quits_cleanly() {
    let machine = Machine::new(GameConfig::default_3x3()).unwrap();
    let mut out = Vec::new();
    let summary = Session::new(
        &machine,
        Cursor::new(b"Hal\n5\n5\n0\n".to_vec()),
        &mut out,
        SessionRng::from_seed(21),
    )
    .run()
    .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.total_wagered, 10);
    assert_eq!(summary.final_balance, 190 + summary.total_won);
    assert_eq!(out.matches("----------").count(), 4);
    assert!(out.contains("Thanks for playing!"));
}
