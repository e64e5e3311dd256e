use std::{fs::File, io::BufReader, path::Path};

use clap::Parser;
use refute::{
    builder::{read_instructions, read_resolution},
    context::Context,
    session::{KnowledgeBase, Session, SessionReport},
    types::err::{self, ErrorKind},
};

use args::{Args, Mode};

mod args;
mod display;
#[cfg(feature = "log")]
mod logging;

fn main() {
    let args = Args::parse();

    #[cfg(feature = "log")]
    if let Err(e) = logging::init(args.log_level) {
        eprintln!("Failed to initialise logs: {e}");
    }

    let ctx = Context::from_config(args.config());

    let result = match &args.mode {
        Mode::Resolution { clauses } => resolution(ctx, clauses, &args),

        Mode::Cooking {
            clauses,
            instructions,
            persist,
        } => cooking(ctx, clauses, instructions, *persist, &args),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ErrorKind> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) => Err(err::StorageError::Read(e.kind()).into()),
    }
}

fn resolution(mut ctx: Context, clauses: &Path, args: &Args) -> Result<(), ErrorKind> {
    let (background, goal) = read_resolution(open(clauses)?)?;
    let report = ctx.refute(&background, &goal)?;

    match args.json {
        true => display::print_json(&report),
        false => display::print_report(&report),
    }
    if args.stats {
        display::print_stats(&ctx.counters);
    }

    Ok(())
}

fn cooking(
    ctx: Context,
    clauses: &Path,
    instructions: &Path,
    persist: bool,
    args: &Args,
) -> Result<(), ErrorKind> {
    let knowledge_base = KnowledgeBase::load(clauses)?;
    let instructions = read_instructions(open(instructions)?)?;

    let mut session = Session::new(ctx, knowledge_base);
    let mut reports = Vec::with_capacity(instructions.len());

    for instruction in &instructions {
        let report = session.execute(instruction)?;

        if !args.json {
            display::print_session_report(instruction, &report);
            if args.stats && matches!(report, SessionReport::Query(_)) {
                display::print_stats(&session.context().counters);
            }
            println!();
        }
        reports.push(report);
    }

    if args.json {
        display::print_json(&reports);
    }

    if persist {
        session.knowledge_base().persist(clauses)?;
    }

    Ok(())
}
