use anyhow::Result;
use crossterm::style::Stylize;
use log::debug;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{self, Input, Outcome};
use crate::config::DefaultsFile;
use crate::rates::RateProvider;
use crate::session::CurrencyPair;

const BANNER: &str = "Type 'help' or '?' for a list of commands and their descriptions.\n";

const HELP_TEXT: &str = "cc = Change Currency | usage: cc [currFrom] [currTo] | e.g: cc btc eur\n\
                         swap | Swaps the two currencies\n\
                         cd = Change Defaults | usage: cd [currency] [currency] | e.g: cd usd eur\n\
                         General: Type a number and it will convert it to the other currency.\n";

/// The interactive read-eval-print loop: one currency pair of session
/// state, a defaults file, and a rate source behind the provider trait so
/// tests can run without the network.
pub struct Shell<P> {
    pair: CurrencyPair,
    defaults: DefaultsFile,
    provider: P,
}

impl<P: RateProvider> Shell<P> {
    pub fn new(pair: CurrencyPair, defaults: DefaultsFile, provider: P) -> Self {
        Self {
            pair,
            defaults,
            provider,
        }
    }

    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    /// Run until stdin is exhausted. Every failure is a single printed line
    /// followed by a fresh prompt; nothing here ends the process.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", BANNER.green());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{}", format!("[{}] : ", self.pair).yellow());
            io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            self.handle_line(&line).await;
        }
        Ok(())
    }

    pub async fn handle_line(&mut self, line: &str) {
        let Some(input) = command::parse_line(line) else {
            return;
        };

        match input {
            Input::Amount(amount) => match self.convert(amount).await {
                Ok(report) => println!("{}", report.cyan()),
                Err(e) => println!("{}", format!("{}", e).red()),
            },
            Input::Command { name, args } => match self.execute(&name, &args) {
                Ok(Outcome::Ok) => {}
                Ok(Outcome::SyntaxError) => println!("{}", "Syntax error in command.".red()),
                Ok(Outcome::InvalidCurrency) => {
                    println!("{}", "Invalid currency / currencies.".red())
                }
                Ok(Outcome::UnknownCommand) => println!("{}", "Unknown command.".red()),
                Err(e) => println!("{}", format!("{}", e).red()),
            },
        }
    }

    fn execute(&mut self, name: &str, args: &[String]) -> Result<Outcome> {
        match name {
            "cc" => {
                if args.len() != 2 {
                    return Ok(Outcome::SyntaxError);
                }
                if !command::is_valid_pair(&args[0], &args[1]) {
                    return Ok(Outcome::InvalidCurrency);
                }
                self.pair.set(&args[0], &args[1]);
                Ok(Outcome::Ok)
            }
            "swap" => {
                self.pair.swap();
                Ok(Outcome::Ok)
            }
            "cd" => {
                if args.len() != 2 {
                    return Ok(Outcome::SyntaxError);
                }
                if !command::is_valid_pair(&args[0], &args[1]) {
                    return Ok(Outcome::InvalidCurrency);
                }
                self.defaults
                    .save(&CurrencyPair::new(&args[0], &args[1]))?;
                Ok(Outcome::Ok)
            }
            "help" | "?" => {
                println!("{}", HELP_TEXT.green());
                Ok(Outcome::Ok)
            }
            _ => Ok(Outcome::UnknownCommand),
        }
    }

    async fn convert(&self, amount: f64) -> Result<String> {
        let rate = self
            .provider
            .fetch_rate(self.pair.from(), self.pair.to())
            .await?;
        debug!("rate {}: {}", self.pair, rate);

        Ok(format!(
            "{} {} = {} {}",
            amount,
            self.pair.from(),
            rate * amount,
            self.pair.to()
        ))
    }
}
