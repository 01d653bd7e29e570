//! The interactive game loop.
//!
//! A [`Session`] owns everything that changes over a run: the balance, the
//! RNG and the console handles. It is driven as a small state machine so
//! that each step reads or writes exactly one thing.

use crate::{
    engine::{Grid, Machine},
    error::SessionError,
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub const DEFAULT_NAME: &str = "Player";

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitingName,
    AwaitingBet,
    Spinning(u64),
    Resolving { bet: u64, grid: Grid },
    GameOver,
}

/// What the player typed at the bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetInput {
    Bet(u64),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub name: String,
    pub rounds: u64,
    pub total_wagered: u64,
    pub total_won: u64,
    pub final_balance: u64,
}

pub struct Session<'m, I, O, R> {
    machine: &'m Machine,
    input: I,
    output: O,
    rng: R,
    name: String,
    balance: u64,
    rounds: u64,
    total_wagered: u64,
    total_won: u64,
}

impl<'m, I, O, R> Session<'m, I, O, R>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    pub fn new(machine: &'m Machine, input: I, output: O, rng: R) -> Self {
        Self {
            machine,
            input,
            output,
            rng,
            name: DEFAULT_NAME.to_string(),
            balance: machine.config().starting_balance,
            rounds: 0,
            total_wagered: 0,
            total_won: 0,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Plays until the player quits or runs out of money.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let mut state = State::AwaitingName;
        loop {
            state = match state {
                State::AwaitingName => {
                    self.name = self.read_name()?;
                    info!(name = %self.name, balance = self.balance, "session started");
                    if self.balance == 0 {
                        State::GameOver
                    } else {
                        State::AwaitingBet
                    }
                }
                State::AwaitingBet => match self.read_bet()? {
                    BetInput::Bet(bet) => State::Spinning(bet),
                    BetInput::Quit => {
                        writeln!(self.output, "Thanks for playing!")?;
                        State::GameOver
                    }
                },
                State::Spinning(bet) => {
                    // escrow: the wager leaves the balance before the outcome is known
                    self.balance -= bet;
                    self.total_wagered = self.total_wagered.saturating_add(bet);
                    self.rounds += 1;
                    let grid = self.machine.spin(&mut self.rng)?;
                    write!(self.output, "{grid}")?;
                    State::Resolving { bet, grid }
                }
                State::Resolving { bet, grid } => {
                    self.resolve(&grid, bet)?;
                    if self.balance == 0 {
                        State::GameOver
                    } else {
                        State::AwaitingBet
                    }
                }
                State::GameOver => break,
            };
        }

        writeln!(self.output, "Game over! You left with ${}.", self.balance)?;
        self.output.flush()?;
        let summary = SessionSummary {
            name: self.name.clone(),
            rounds: self.rounds,
            total_wagered: self.total_wagered,
            total_won: self.total_won,
            final_balance: self.balance,
        };
        info!(
            rounds = summary.rounds,
            wagered = summary.total_wagered,
            won = summary.total_won,
            balance = summary.final_balance,
            "session finished"
        );
        Ok(summary)
    }

    /// Asks for the player's name once. Never fails on bad input; falls back
    /// to [`DEFAULT_NAME`].
    pub fn read_name(&mut self) -> io::Result<String> {
        writeln!(self.output, "Welcome to the Casino Slot Machine!")?;
        write!(self.output, "Enter your name: ")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                warn!("could not read player name");
                writeln!(
                    self.output,
                    "Error reading name. Using default name '{DEFAULT_NAME}'."
                )?;
                return Ok(DEFAULT_NAME.to_string());
            }
            Ok(_) => {}
        }

        let name = match line.trim() {
            "" => DEFAULT_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        writeln!(self.output, "Welcome {name}, let's play!")?;
        Ok(name)
    }

    /// Prompts until a bet in `0..=balance` is entered. A closed input
    /// stream counts as quitting.
    pub fn read_bet(&mut self) -> io::Result<BetInput> {
        loop {
            write!(
                self.output,
                "Enter your bet (balance = ${}) or 0 to quit: ",
                self.balance
            )?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(self.output)?;
                    warn!("input closed at bet prompt");
                    return Ok(BetInput::Quit);
                }
                Ok(_) => {}
                // invalid utf-8: the bytes are consumed, treat like garbage
                Err(e) if e.kind() == io::ErrorKind::InvalidData => line.clear(),
                Err(e) => return Err(e),
            }

            let bet = match line.trim().parse::<u64>() {
                Ok(bet) => bet,
                Err(_) => {
                    warn!(input = line.trim(), "rejected non-numeric bet");
                    writeln!(self.output, "Please enter a valid number.")?;
                    continue;
                }
            };

            if bet == 0 {
                return Ok(BetInput::Quit);
            }
            if bet > self.balance {
                writeln!(
                    self.output,
                    "Bet cannot be larger than your current balance."
                )?;
                continue;
            }
            return Ok(BetInput::Bet(bet));
        }
    }

    fn resolve(&mut self, grid: &Grid, bet: u64) -> io::Result<()> {
        let outcome = self.machine.settle(grid, bet);
        for (line, win, multiplier) in outcome.winning_lines() {
            writeln!(
                self.output,
                "Line #{line} wins: ${win} ({multiplier}x multiplier)"
            )?;
        }
        if outcome.total_win == 0 {
            writeln!(
                self.output,
                "No winning lines this spin. Better luck next time!"
            )?;
        } else {
            self.balance = self.balance.saturating_add(outcome.total_win);
            self.total_won = self.total_won.saturating_add(outcome.total_win);
        }
        writeln!(self.output, "New balance: ${}\n", self.balance)
    }
}
