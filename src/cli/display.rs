use refute::{
    context::Counters,
    reports::{Proof, Report},
    session::{Instruction, SessionReport},
    structures::clause::Clause,
};

const SEPARATOR: &str = "===============";

fn print_clauses(clauses: &[Clause]) {
    for (index, clause) in clauses.iter().enumerate() {
        println!("{}. {clause}", index + 1);
    }
}

fn print_proof(proof: &Proof) {
    for step in proof.axioms() {
        println!("{}. {}", step.index, step.clause);
    }
    println!("{SEPARATOR}");
    for step in proof.derived() {
        match step.parents {
            Some((p, q)) => println!("{}. {} ({p}, {q})", step.index, step.clause),
            None => println!("{}. {}", step.index, step.clause),
        }
    }
}

pub fn print_report(report: &Report) {
    match report {
        Report::Refuted { goal, proof } => {
            print_proof(proof);
            println!("{SEPARATOR}");
            println!("[CONCLUSION]: {goal} is true");
        }

        Report::Exhausted { goal, axioms } => {
            print_clauses(axioms);
            println!("{SEPARATOR}");
            println!("[CONCLUSION]: {goal} is unknown");
        }
    }
}

pub fn print_session_report(instruction: &Instruction, report: &SessionReport) {
    println!("User's command: {instruction}");
    match report {
        SessionReport::Query(report) => print_report(report),
        SessionReport::Asserted(clause) => println!("Added {clause}"),
        SessionReport::Retracted(clause) => println!("Removed {clause}"),
        SessionReport::RetractMissing(clause) => println!("Not present, so not removed: {clause}"),
    }
}

pub fn print_stats(counters: &Counters) {
    println!("[STATS]: {counters}");
}

/// Writes `value` to stdout as JSON, exiting on failure.
pub fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to write JSON: {e}");
            std::process::exit(2);
        }
    }
}
