use anyhow::{anyhow, ensure, Result};
use clap::Parser;
use general::{parse_words, read_input, reset_sigpipe};
use mt19937::{advance, advance_into, state_from_slice, STATE_LEN};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Advance an MT19937 state of 624 words
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about=None)]
struct Args {
    /// Number of generations to advance
    #[arg(short, long, default_value_t = 1)]
    generations: usize,

    /// Keep the untempered state between generations and print the tempered output of each
    #[arg(short, long)]
    preserve: bool,

    /// file|stdin of 624 whitespace separated words, filename of "-" implies stdin
    file: Option<PathBuf>,
}

fn advance_generations(state: &mut [u32], generations: usize, preserve: bool, out: &mut impl Write) -> Result<()> {
    ensure!(generations > 0, "generations must be at least 1");

    match preserve {
        true => {
            let state = state_from_slice(state)?;
            let mut output = [0_u32; STATE_LEN];
            for _ in 0..generations {
                advance_into(state, &mut output);
                for y in output {
                    writeln!(out, "{y}")?;
                }
            }
        }
        false => {
            for _ in 0..generations {
                advance(state)?;
            }
            for y in state.iter() {
                writeln!(out, "{y}")?;
            }
        }
    }
    Ok(())
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let (text, input_name) =
        read_input(args.file.as_ref()).map_err(|e| anyhow!("could not read state from `{:?}`: {e}", args.file))?;
    let mut state: Vec<u32> = parse_words(&text).map_err(|e| anyhow!("could not parse `{input_name}`: {e}"))?;
    debug!(input = %input_name, words = state.len(), "read state");

    advance_generations(&mut state, args.generations, args.preserve, out)?;
    info!(input = %input_name, generations = args.generations, preserve = args.preserve, "advanced state");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // behave like a typical unix utility
    reset_sigpipe()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    run(&args, &mut stdout)?;
    Ok(())
}
