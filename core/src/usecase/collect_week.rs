use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::input::{parse_amount, AmountError};
use crate::model::daily_series::DailySeries;
use crate::time::{week_days, weekday_name};

pub const BANNER: &str = "===== Weekly Spending Tracker =====";
pub const TAGLINE: &str = "Track how much money you spend each day of the week!";
pub const LIMIT_PROMPT: &str = "What is your spending limit for the week? $";
pub const NEGATIVE_AMOUNT_MESSAGE: &str = "Error: Please enter a non-negative amount.";

#[derive(Debug, Clone, PartialEq)]
pub struct CollectedWeek {
    pub limit: f64,
    pub series: DailySeries,
}

/// Interactive prompt loop collecting a weekly limit and one amount per day.
pub struct WeekCollector<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> WeekCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run the session. A `limit` supplied up front skips the limit prompt.
    pub fn collect(&mut self, limit: Option<f64>) -> Result<CollectedWeek> {
        writeln!(self.writer, "{}", BANNER)?;
        writeln!(self.writer, "{}", TAGLINE)?;
        writeln!(self.writer)?;

        let limit = match limit {
            Some(l) => l,
            None => {
                let l = self
                    .prompt_amount(LIMIT_PROMPT)
                    .context("Failed to read the weekly spending limit")?;
                writeln!(self.writer)?;
                l
            }
        };

        let mut amounts = Vec::new();
        for day in week_days() {
            let name = weekday_name(day);
            let prompt = format!("Enter spending for {}: $", name);
            let amount = self
                .prompt_amount(&prompt)
                .with_context(|| format!("Failed to read spending for {}", name))?;
            amounts.push(amount);
        }
        writeln!(self.writer)?;
        self.writer.flush()?;

        Ok(CollectedWeek {
            limit,
            series: DailySeries::from(amounts),
        })
    }

    /// Prompt until a valid amount is entered.
    fn prompt_amount(&mut self, prompt: &str) -> Result<f64> {
        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(anyhow!("Input ended before an amount was entered"));
            }

            match parse_amount(&line) {
                Ok(value) => return Ok(value),
                Err(AmountError::Negative(value)) => {
                    debug!(value, "rejected negative amount");
                    writeln!(self.writer, "{}", NEGATIVE_AMOUNT_MESSAGE)?;
                }
                Err(e) => {
                    debug!(error = %e, "rejected amount");
                    writeln!(self.writer, "Error: {}.", e)?;
                }
            }
        }
    }
}
