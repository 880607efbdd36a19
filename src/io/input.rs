// src/io/input.rs

use crate::error::InputError;
use crate::simulation::config::SimulationConfig;
use crate::simulation::traits::{InputSource, TickGate};
use std::io::{self, BufRead, Write};

/// Asks for each number on `output` and reads answers from `input`,
/// asking again until the answer is in range.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask<F>(&mut self, prompt: &str, what: &'static str, accept: F) -> Result<usize, InputError>
    where
        F: Fn(usize) -> bool,
    {
        let mut line = String::new();
        loop {
            write!(self.output, "\n{}", prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::Closed(what));
            }
            match line.trim().parse::<usize>() {
                Ok(value) if accept(value) => return Ok(value),
                _ => continue,
            }
        }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsolePrompt<R, W> {
    fn passengers(&mut self, max: usize) -> Result<usize, InputError> {
        let prompt = format!("Enter # of passengers (1 to {}): ", max);
        self.ask(&prompt, "passenger count", |n| (1..=max).contains(&n))
    }

    fn carousel_size(&mut self, passengers: usize) -> Result<usize, InputError> {
        self.ask(
            "Enter # of suitcases that fit on carousel (at least as many as passengers): ",
            "carousel size",
            |n| n >= passengers,
        )
    }

    fn total_minutes(&mut self) -> Result<usize, InputError> {
        self.ask(
            "Enter total minutes to get baggage (at least 1): ",
            "number of minutes",
            |n| n >= 1,
        )
    }
}

/// Fills in the run size on top of `base` (loader layout, rotation, seed).
pub fn read_config<S>(source: &mut S, base: SimulationConfig) -> Result<SimulationConfig, InputError>
where
    S: InputSource + ?Sized,
{
    let passengers = source.passengers(base.max_passengers())?;
    let carousel_size = source.carousel_size(passengers)?;
    let total_minutes = source.total_minutes()?;
    Ok(SimulationConfig {
        passengers,
        carousel_size,
        total_minutes,
        ..base
    })
}

/// Waits for the user to press Enter before each new tick.
pub struct EnterGate<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> EnterGate<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> TickGate for EnterGate<R, W> {
    fn advance(&mut self) -> io::Result<()> {
        write!(self.output, "Press Enter to advance time")?;
        self.output.flush()?;
        // A closed input just stops the waiting.
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}
