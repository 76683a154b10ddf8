//! Headless replay driver (default binary).
//!
//! Owns one board, feeds it a command script, and reports the outcome. It plays the role
//! of the input layer and the timer: every script line becomes one board command, and
//! `tick` lines stand in for timer expiries at the reported delay.

mod script;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use tetris_rules::core::{Board, BoardSnapshot, GameRecord, Randomizer, Rules};

#[derive(Debug, Parser)]
#[command(name = "tetris-replay", about = "Replay a command script against the rules engine")]
struct Args {
    /// Script file; reads stdin when omitted or `-`
    script: Option<PathBuf>,

    /// Seed for the piece randomizer
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Next-piece policy: `uniform` or `bag7`
    #[arg(long, default_value = "uniform", value_parser = parse_randomizer)]
    randomizer: Randomizer,

    /// Best score carried over from storage
    #[arg(long, default_value_t = 0)]
    high_score: u32,

    /// Player name for the game-over record
    #[arg(long, default_value = "")]
    player: String,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Log every lock to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn parse_randomizer(s: &str) -> Result<Randomizer, String> {
    Randomizer::from_str(s).ok_or_else(|| format!("unknown randomizer `{s}`"))
}

#[derive(Debug, Serialize)]
struct Report {
    commands_applied: u32,
    commands_rejected: u32,
    delay_ms: u32,
    snapshot: BoardSnapshot,
    record: Option<GameRecord>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = read_script(args.script.as_ref())?;
    let steps = script::parse(&source)?;

    let rules = Rules {
        randomizer: args.randomizer,
        seed: args.seed,
        ..Rules::default()
    };
    let mut board = Board::with_rules(rules);
    board.set_high_score(args.high_score);

    let mut applied = 0u32;
    let mut rejected = 0u32;
    for step in &steps {
        for _ in 0..step.repeat {
            if board.apply(step.command) {
                applied += 1;
            } else {
                rejected += 1;
            }

            if let Some(event) = board.take_last_event() {
                if args.verbose {
                    eprintln!(
                        "line {}: locked {:?} at ({}, {}), lines={} points={} level_up={} game_over={}",
                        step.line,
                        event.piece.shape,
                        event.piece.x,
                        event.piece.y,
                        event.lines_cleared(),
                        event.line_clear_score + event.drop_score,
                        event.level_up,
                        event.game_over,
                    );
                }
            }
        }
    }

    let report = Report {
        commands_applied: applied,
        commands_rejected: rejected,
        delay_ms: board.delay_for_level().as_millis() as u32,
        snapshot: board.snapshot(),
        record: board.final_record(&args.player),
    };

    if args.json {
        let out = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{out}");
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("read script {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read script from stdin")?;
            Ok(buf)
        }
    }
}

fn print_summary(report: &Report) {
    let s = &report.snapshot;
    println!("status:     {:?}", s.status);
    println!("score:      {}", s.score);
    println!("high score: {}", s.high_score);
    println!("level:      {}", s.level);
    println!("lines:      {}", s.lines_cleared);
    println!("delay:      {}ms", report.delay_ms);
    println!(
        "commands:   {} applied, {} rejected",
        report.commands_applied, report.commands_rejected
    );
    if let Some(record) = &report.record {
        println!(
            "game over:  {} scored {} (level {}, {} lines)",
            record.player, record.score, record.level, record.lines_cleared
        );
    }
}
