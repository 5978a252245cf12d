//! Interactive menu around the cipher functions.
//!
//! The session reads from any async line source and writes to any async sink,
//! so the same loop drives a terminal or an in-memory buffer.

use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::algos::caesar::{brute_force, caesar_shift};
use crate::algos::frequency::{frequency_analysis, ranked};
use crate::algos::pigpen::{decode, encode};
use crate::error::Result;
use crate::palette::Palette;
use crate::structs::{Decoded, Mappings};

const MENU: [&str; 6] = [
    "[1] Encode text with Pigpen",
    "[2] Decode text from Pigpen",
    "[3] Decode text from Pigpen then apply Caesar shift",
    "[4] Brute-force every Caesar shift",
    "[5] Letter frequency analysis",
    "[6] Quit",
];

const SYMBOLS_PROMPT: &str = "Enter Pigpen (symbols separated by spaces): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Encode,
    Decode,
    DecodeThenShift,
    BruteForce,
    Frequency,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Encode),
            "2" => Some(MenuChoice::Decode),
            "3" => Some(MenuChoice::DecodeThenShift),
            "4" => Some(MenuChoice::BruteForce),
            "5" => Some(MenuChoice::Frequency),
            "6" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

/// Parses a shift typed by the user; `None` when it is not an integer.
pub fn parse_shift(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

pub fn warning_lines(decoded: &Decoded, palette: Palette) -> Vec<String> {
    decoded
        .warnings
        .iter()
        .map(|w| palette.warning(&format!("Warning: {}.", w)))
        .collect()
}

pub fn brute_force_lines(text: &str) -> Vec<String> {
    brute_force(text)
        .map(|(shift, candidate)| format!("Shift {:2}: {}", shift, candidate))
        .collect()
}

pub fn frequency_lines(text: &str) -> Vec<String> {
    let counts = ranked(&frequency_analysis(text));
    if counts.is_empty() {
        return vec!["No letters found.".to_string()];
    }

    counts
        .into_iter()
        .map(|(letter, count)| format!("{}: {}", letter, count))
        .collect()
}

pub struct Session<'a, R, W> {
    lines: Lines<R>,
    out: W,
    mappings: &'a Mappings,
    palette: Palette,
}

impl<'a, R, W> Session<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W, mappings: &'a Mappings, palette: Palette) -> Self {
        Session {
            lines: input.lines(),
            out,
            mappings,
            palette,
        }
    }

    /// Runs the menu until the user quits or input ends.
    pub async fn run(mut self) -> Result<W> {
        info!("Interactive session started");

        loop {
            let title = self.palette.title("Pigpen Helper");
            self.write_line(&title).await?;
            for entry in MENU {
                self.write_line(entry).await?;
            }

            let prompt = self.palette.prompt("Choose an option: ");
            let Some(choice) = self.ask(&prompt).await? else {
                break;
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Quit) => {
                    self.write_line("Bye!").await?;
                    break;
                }
                Some(choice) => self.handle(choice).await?,
                None => {
                    let message = self.palette.warning("Invalid option.");
                    self.write_line(&message).await?;
                    Flow::Continue
                }
            };

            if let Flow::Stop = flow {
                break;
            }
            self.write_line("").await?;
        }

        self.out.flush().await?;
        info!("Interactive session finished");
        Ok(self.out)
    }

    async fn handle(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Encode => {
                let Some(plain) = self.ask("Enter plaintext: ").await? else {
                    return Ok(Flow::Stop);
                };
                let encoded = encode(&plain, self.mappings.forward());
                self.write_line(&encoded).await?;
            }
            MenuChoice::Decode => {
                let Some(symbols) = self.ask(SYMBOLS_PROMPT).await? else {
                    return Ok(Flow::Stop);
                };
                let decoded = self.decode_reporting(&symbols).await?;
                self.write_line(&decoded.text).await?;
            }
            MenuChoice::DecodeThenShift => {
                let Some(symbols) = self.ask(SYMBOLS_PROMPT).await? else {
                    return Ok(Flow::Stop);
                };
                let decoded = self.decode_reporting(&symbols).await?;

                let Some(raw_shift) = self.ask("Enter Caesar shift N: ").await? else {
                    return Ok(Flow::Stop);
                };
                let shift = match parse_shift(&raw_shift) {
                    Some(shift) => shift,
                    None => {
                        warn!("Invalid shift input '{}'", raw_shift.trim());
                        let message = self.palette.warning("Invalid shift; using 0.");
                        self.write_line(&message).await?;
                        0
                    }
                };
                self.write_line(&caesar_shift(&decoded.text, shift)).await?;
            }
            MenuChoice::BruteForce => {
                let Some(text) = self.ask("Enter ciphertext: ").await? else {
                    return Ok(Flow::Stop);
                };
                for line in brute_force_lines(&text) {
                    self.write_line(&line).await?;
                }
            }
            MenuChoice::Frequency => {
                let Some(text) = self.ask("Enter text: ").await? else {
                    return Ok(Flow::Stop);
                };
                for line in frequency_lines(&text) {
                    self.write_line(&line).await?;
                }
            }
            MenuChoice::Quit => return Ok(Flow::Stop),
        }

        Ok(Flow::Continue)
    }

    async fn decode_reporting(&mut self, symbols: &str) -> Result<Decoded> {
        let decoded = decode(symbols, self.mappings.reverse());
        for line in warning_lines(&decoded, self.palette) {
            self.write_line(&line).await?;
        }
        Ok(decoded)
    }

    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.write_all(prompt.as_bytes()).await?;
        self.out.flush().await?;
        Ok(self.lines.next_line().await?)
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        Ok(())
    }
}
