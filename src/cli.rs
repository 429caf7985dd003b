use clap::{Parser, Subcommand};
use oslab::{core::state::Ticks, quiz::Topic};
use std::path::PathBuf;

/// OS Lab - learn CPU scheduling and memory allocation by running them
#[derive(Parser)]
#[command(name = "oslab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long, global = true, env = "OSLAB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Schedule processes first-come-first-served
    Fcfs {
        /// Processes as ARRIVAL:BURST, e.g. 0:5 1:3 2:8
        #[arg(required = true, value_parser = parse_process)]
        processes: Vec<(Ticks, Ticks)>,
    },

    /// Place memory requests into blocks with first fit
    FirstFit {
        /// Block sizes in KB, in address order
        #[arg(short, long, value_delimiter = ',', required = true)]
        blocks: Vec<u64>,

        /// Request sizes in KB, in arrival order
        #[arg(short, long, value_delimiter = ',', required = true)]
        requests: Vec<u64>,
    },

    /// Schedule a seeded random workload
    Random {
        /// Number of ticks during which processes may arrive
        #[arg(short = 'n', long, default_value_t = 20)]
        ticks: u64,

        /// Chance that a process arrives on any tick
        #[arg(long, default_value_t = 0.3)]
        p_arrival: f64,

        /// Chance that an arriving process is short
        #[arg(long, default_value_t = 0.3)]
        p_short: f64,

        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },

    /// Answer multiple-choice questions
    Quiz {
        /// Restrict to one topic (fcfs, first-fit)
        #[arg(short, long)]
        topic: Option<Topic>,
    },

    /// Show or clear XP and completed modules
    Progress {
        #[arg(long)]
        reset: bool,
    },
}

fn parse_process(s: &str) -> Result<(Ticks, Ticks), String> {
    let (arrival, burst) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ARRIVAL:BURST, got '{s}'"))?;
    let arrival = arrival
        .trim()
        .parse()
        .map_err(|e| format!("bad arrival time '{arrival}': {e}"))?;
    let burst = burst
        .trim()
        .parse()
        .map_err(|e| format!("bad burst time '{burst}': {e}"))?;
    Ok((arrival, burst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_process_pairs() {
        assert_eq!(parse_process("0:5"), Ok((0, 5)));
        assert_eq!(parse_process(" 2 : 8 "), Ok((2, 8)));
        assert!(parse_process("5").is_err());
        assert!(parse_process("-1:3").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn first_fit_takes_comma_lists() {
        let cli = Cli::try_parse_from([
            "oslab",
            "first-fit",
            "--blocks",
            "100,500",
            "--requests",
            "212",
        ])
        .unwrap();
        match cli.command {
            Commands::FirstFit { blocks, requests } => {
                assert_eq!(blocks, vec![100, 500]);
                assert_eq!(requests, vec![212]);
            }
            _ => panic!("expected first-fit"),
        }
    }

    #[test]
    fn random_defaults_and_overrides() {
        let cli = Cli::try_parse_from(["oslab", "random"]).unwrap();
        assert!(matches!(cli.command, Commands::Random { ticks: 20, seed: 0, .. }));

        let args = ["oslab", "random", "-n", "40", "--p-arrival", "0.5", "-s", "9"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Random {
                ticks,
                p_arrival,
                seed,
                ..
            } => {
                assert_eq!((ticks, seed), (40, 9));
                assert_eq!(p_arrival, 0.5);
            }
            _ => panic!("expected random"),
        }
    }
}
