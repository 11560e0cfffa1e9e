use std::collections::HashMap;
use std::io::Write;

use clap::Parser;
use colored::Colorize;

use potsplit::session::Session;
use potsplit::Rank;

#[derive(Parser)]
#[command(about, long_about = None)]
enum Command {
    #[command(about = "Seat 2-8 players in settlement order", alias = "p")]
    Players {
        #[arg(required = true)]
        names: Vec<String>,
    },
    #[command(about = "Record a round of ranks, one per seat", alias = "r")]
    Round {
        #[arg(required = true)]
        ranks: Vec<Rank>,
    },
    #[command(about = "Show recorded rounds", alias = "h")]
    History,
    #[command(about = "Remove the most recent round", alias = "u")]
    Undo,
    #[command(about = "Discard all recorded rounds")]
    Clear,
    #[command(about = "Settle the table", alias = "s")]
    Settle,
    #[command(about = "Settle and print the report as JSON", alias = "j")]
    Json,
}

fn main() -> anyhow::Result<()> {
    potsplit::log();
    println!(
        "{}",
        "rank-gap stakes. first place collects double, last seat pays double, ties are even."
            .bold()
    );
    println!("start with: players <name> <name> ...");
    let mut session = None;
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let ref mut input = String::new();
        if std::io::stdin().read_line(input)? == 0 {
            break;
        }
        match input.trim() {
            "" => continue,
            "quit" => break,
            "exit" => break,
            line => match handle(&mut session, line) {
                Err(e) => eprintln!("{}", e),
                Ok(_) => continue,
            },
        }
    }
    Ok(())
}

fn handle(session: &mut Option<Session>, line: &str) -> anyhow::Result<()> {
    match Command::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))? {
        Command::Players { names } => seat(session, names),
        Command::Round { ranks } => record(seated(session)?, ranks),
        Command::History => Ok(history(seated(session)?)),
        Command::Undo => Ok(undo(seated(session)?)),
        Command::Clear => Ok(seated(session)?.reset()),
        Command::Settle => Ok(report(seated(session)?)),
        Command::Json => json(seated(session)?),
    }
}

fn seated(session: &mut Option<Session>) -> anyhow::Result<&mut Session> {
    session
        .as_mut()
        .ok_or_else(|| anyhow::anyhow!("no players seated yet"))
}

fn seat(session: &mut Option<Session>, names: Vec<String>) -> anyhow::Result<()> {
    match session {
        Some(session) => session.configure(names)?,
        None => *session = Some(Session::new(names)?),
    }
    let roster = session.as_ref().expect("just seated").roster();
    println!("seated: {}", roster.names().join(", "));
    Ok(())
}

fn record(session: &mut Session, ranks: Vec<Rank>) -> anyhow::Result<()> {
    let seats = session.roster().seats();
    if ranks.len() != seats {
        return Err(anyhow::anyhow!("expected {} ranks, got {}", seats, ranks.len()));
    }
    let entries = session
        .roster()
        .names()
        .iter()
        .cloned()
        .zip(ranks)
        .collect::<HashMap<String, Rank>>();
    session.submit(&entries)?;
    println!("round {} recorded", session.rounds().len());
    Ok(())
}

fn history(session: &Session) {
    if session.rounds().is_empty() {
        println!("no rounds recorded");
        return;
    }
    println!("{}", session.roster().names().join(" "));
    for (i, round) in session.rounds().iter().enumerate() {
        println!("{:>3}. {}", i + 1, round);
    }
}

fn undo(session: &mut Session) {
    match session.undo() {
        Some(round) => println!("removed round: {}", round),
        None => println!("nothing to undo"),
    }
}

fn report(session: &Session) {
    let settlement = session.settle();
    println!("{}", "pairwise".bold());
    if settlement.pairwise.iter().all(|pair| pair.net == 0) {
        println!("  all square");
    } else {
        for pair in settlement.pairwise.iter().filter(|pair| pair.net != 0) {
            println!("  {}", pair);
        }
    }
    println!("{}", "transfers".bold());
    if settlement.transfers.is_empty() {
        println!("  nothing to settle");
    } else {
        for transfer in &settlement.transfers {
            println!("  {}", transfer);
        }
    }
    println!("{}", "totals".bold());
    for balance in &settlement.balances {
        println!("  {}", balance);
    }
    if let Some(winner) = settlement.winner() {
        println!(
            "{}",
            format!("{} takes the table, up {}", winner.name, winner.chips)
                .yellow()
                .bold()
        );
    }
}

fn json(session: &Session) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&session.settle())?);
    Ok(())
}
