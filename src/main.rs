mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use oslab::{
    LabConfig, LabSim, ModuleId, Progress,
    config::DEFAULT_CONFIG_FILE,
    progress::JsonFileStore,
    quiz::{QuizSession, TopicFilter},
    render,
    sim::{WorkloadSpec, workload},
};
use rustyline::{Editor, error::ReadlineError};
use tracing_subscriber::EnvFilter;

type LabProgress = Progress<JsonFileStore>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    let config = LabConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let store = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("opening {}", config.store_path.display()))?;
    let mut progress = Progress::load(store, config.xp_per_level)?;

    match cli.command {
        Commands::Fcfs { processes } => {
            let mut sim = LabSim::default();
            for (arrival, burst) in processes {
                sim.add_process(arrival, burst)?;
            }
            run_fcfs(&mut sim);
            progress.record_run(ModuleId::Fcfs, config.rewards.fcfs_run)?;
            print_xp(&progress, config.rewards.fcfs_run);
        }

        Commands::FirstFit { blocks, requests } => {
            let mut sim = LabSim::default();
            for size in blocks {
                sim.add_block(size)?;
            }
            for size in requests {
                sim.add_request(size)?;
            }
            run_first_fit(&mut sim);
            progress.record_run(ModuleId::FirstFit, config.rewards.first_fit_run)?;
            print_xp(&progress, config.rewards.first_fit_run);
        }

        Commands::Random {
            ticks,
            p_arrival,
            p_short,
            seed,
        } => {
            let spec = WorkloadSpec {
                ticks,
                p_arrival,
                p_short,
                seed,
                ..WorkloadSpec::default()
            };
            let mut sim = LabSim::default();
            for (arrival, burst) in workload::bernoulli(&spec) {
                sim.add_process(arrival, burst)?;
            }
            if sim.processes().is_empty() {
                println!("No process arrived in {ticks} ticks; try a higher --p-arrival.");
            } else {
                run_fcfs(&mut sim);
            }
        }

        Commands::Quiz { topic } => {
            let filter = topic.map_or(TopicFilter::All, TopicFilter::Only);
            run_quiz(QuizSession::new(filter), &mut progress, config.rewards.quiz_correct)?;
        }

        Commands::Progress { reset } => {
            if reset {
                progress.reset()?;
                println!("Progress cleared.");
            }
            print_progress(&progress);
        }
    }

    Ok(())
}

fn run_fcfs(sim: &mut LabSim) {
    println!("{:<8}{:>10}{:>8}", "Process", "Arrival", "Burst");
    for process in sim.processes() {
        println!(
            "{:<8}{:>10}{:>8}",
            process.name, process.arrival_time, process.burst_time
        );
    }

    let report = sim.run_schedule();

    println!("\nGantt Chart Timeline");
    println!("{}", render::gantt(&report));

    println!("\nStep-by-Step Execution");
    for (step, event) in report.events().iter().enumerate() {
        println!("{:>3}. {event}", step + 1);
    }

    println!("\n{:<8}{:>8}{:>8}{:>8}{:>12}", "Process", "Start", "End", "Wait", "Turnaround");
    for entry in &report.timeline {
        println!(
            "{:<8}{:>8}{:>8}{:>8}{:>12}",
            entry.name,
            entry.start_time,
            entry.end_time,
            entry.wait_time,
            entry.turnaround_time()
        );
    }

    println!("\nAverage Waiting Time:    {:.2} units", report.average_wait_time);
    println!("Average Turnaround Time: {:.2} units", report.average_turnaround_time);
}

fn run_first_fit(sim: &mut LabSim) {
    let result = sim.run_allocation();

    println!("Memory Allocation");
    print!("{}", render::memory_map(&result));

    println!("\nAllocation Steps");
    for (step, event) in result.events().iter().enumerate() {
        println!("{:>3}. {event}", step + 1);
    }

    println!(
        "\nAllocated Processes: {}/{}",
        result.placed_count(),
        result.requests.len()
    );
    println!("Used Blocks:         {}/{}", result.used_blocks(), result.blocks.len());
    println!("Internal Fragmentation: {} KB", result.total_fragmentation());

    let unplaced: Vec<String> = result
        .unplaced()
        .map(|r| format!("{} ({} KB)", r.name, r.size))
        .collect();
    if !unplaced.is_empty() {
        println!("Some processes could not be allocated: {}", unplaced.join(", "));
    }
}

fn run_quiz(mut quiz: QuizSession, progress: &mut LabProgress, reward: u64) -> anyhow::Result<()> {
    if quiz.is_empty() {
        println!("No questions for this topic.");
        return Ok(());
    }

    let mut rl = Editor::<()>::new()?;
    while let Some(question) = quiz.current() {
        println!(
            "\nQuestion {} of {} [{}]",
            quiz.position() + 1,
            quiz.len(),
            question.topic
        );
        println!("{}", question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {option}", (b'A' + i as u8) as char);
        }

        let outcome = loop {
            let line = match rl.readline("answer> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
                Err(err) => return Err(err.into()),
            };
            let choice = line.trim().to_ascii_uppercase();
            let index = match choice.as_bytes() {
                [c @ b'A'..=b'D'] => (c - b'A') as usize,
                _ => {
                    println!("Pick A, B, C or D.");
                    continue;
                }
            };
            quiz.select(index);
            if let Some(outcome) = quiz.submit() {
                break outcome;
            }
        };

        if outcome.correct {
            println!("Correct!");
        } else {
            println!(
                "Incorrect. The answer is {}.",
                (b'A' + outcome.correct_index as u8) as char
            );
        }
        println!("{}", outcome.explanation);

        if outcome.first_correct {
            progress.record_run(ModuleId::Quiz, reward)?;
            println!("+{reward} XP");
        }
        quiz.advance();
    }

    println!(
        "\nQuiz complete: {} out of {} correct ({}%), {} XP earned",
        quiz.score(),
        quiz.len(),
        quiz.percentage(),
        quiz.score() as u64 * reward
    );
    print_progress(progress);
    Ok(())
}

fn print_xp(progress: &LabProgress, reward: u64) {
    println!("\n+{reward} XP (total {} XP, level {})", progress.xp(), progress.level());
}

fn print_progress(progress: &LabProgress) {
    println!("XP: {}  Level: {}", progress.xp(), progress.level());
    println!("Progress: {}%", progress.progress_percent());
    for module in ModuleId::ALL {
        let mark = if progress.is_completed(module) { "x" } else { " " };
        println!("  [{mark}] {}", module.title());
    }
}
