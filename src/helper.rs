use clap::{ArgAction, Parser, Subcommand};
use log::{debug, LevelFilter};
use pigpen_helper::palette::Palette;
use pigpen_helper::shell::{
    brute_force_lines, frequency_lines, parse_shift, warning_lines, Session,
};
use pigpen_helper::{caesar_shift, decode, encode, Result, STANDARD_MAPPINGS};
use tokio::io::BufReader;

#[derive(Parser)]
#[command(version, about = "Pigpen encoder/decoder with Caesar shift helpers")]
struct Args {
    /// Disable colored output (the NO_COLOR variable does the same)
    #[arg(long)]
    no_color: bool,

    /// Verbosity: -v warn, -vv info, -vvv debug, -vvvv trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Encode plaintext into Pigpen symbols
    Encode { text: String },

    /// Decode space separated Pigpen symbols, optionally Caesar shifting the result
    Decode {
        symbols: String,

        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,
    },

    /// Caesar shift text by N positions (negative allowed)
    Shift {
        text: String,

        #[arg(allow_hyphen_values = true)]
        n: String,
    },

    /// Print all 26 Caesar shifts of the text
    Brute { text: String },

    /// Count letters in the text
    Freq { text: String },
}

fn setup_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()?;
    Ok(())
}

fn shift_or_zero(raw: &str, palette: Palette) -> i64 {
    parse_shift(raw).unwrap_or_else(|| {
        eprintln!("{}", palette.warning("Invalid shift; using 0."));
        0
    })
}

fn run_command(command: Command, palette: Palette) {
    match command {
        Command::Encode { text } => {
            println!("{}", encode(&text, STANDARD_MAPPINGS.forward()));
        }
        Command::Decode { symbols, shift } => {
            let decoded = decode(&symbols, STANDARD_MAPPINGS.reverse());
            for line in warning_lines(&decoded, palette) {
                eprintln!("{}", line);
            }
            match shift {
                Some(raw) => println!("{}", caesar_shift(&decoded.text, shift_or_zero(&raw, palette))),
                None => println!("{}", decoded.text),
            }
        }
        Command::Shift { text, n } => {
            println!("{}", caesar_shift(&text, shift_or_zero(&n, palette)));
        }
        Command::Brute { text } => {
            for line in brute_force_lines(&text) {
                println!("{}", line);
            }
        }
        Command::Freq { text } => {
            for line in frequency_lines(&text) {
                println!("{}", line);
            }
        }
    }
}

async fn execute_app() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let palette = Palette::new(!args.no_color && std::env::var_os("NO_COLOR").is_none());
    debug!("Colors enabled: {}", palette.is_enabled());

    match args.command {
        Some(command) => run_command(command, palette),
        None => {
            let input = BufReader::new(tokio::io::stdin());
            let session = Session::new(input, tokio::io::stdout(), &STANDARD_MAPPINGS, palette);
            session.run().await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = execute_app().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
