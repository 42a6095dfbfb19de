//! Breadboard - circuit layout driver
//!
//! Applies a layout script to a fresh workbench and reports which
//! components end up energized. Useful for exercising the engine without a
//! browser frontend.
//!
//! # Script format
//!
//! One command per line; `#` starts a comment. Ids are the numbers assigned
//! by `place`, starting at 0.
//!
//! ```text
//! place battery 50 50
//! place switch 150 50
//! place bulb 250 50
//! toggle 1
//! ```

use std::path::PathBuf;

use clap::Parser;

use breadboard_core::{
    BreadboardError, ComponentId, ComponentKind, Point, Result, Workbench,
};

/// Circuit layout driver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the layout script
    #[arg(value_name = "SCRIPT_FILE")]
    script: PathBuf,

    /// Print board state after every command
    #[arg(short, long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.script).map_err(|source| {
        BreadboardError::FileReadError {
            path: args.script.display().to_string(),
            source,
        }
    })?;

    let mut bench = Workbench::new();
    run_script(&mut bench, &text, args.trace)?;

    if !args.trace {
        print_state(&bench);
    }

    Ok(())
}

/// Run a whole layout script against the workbench.
///
/// `#` starts a comment; blank lines are skipped. Line numbers in errors
/// are 1-based.
fn run_script(bench: &mut Workbench, text: &str, trace: bool) -> Result<()> {
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        apply_command(bench, line_no, line)?;
        if trace {
            println!("after line {line_no}: {line}");
            print_state(bench);
        }
    }
    Ok(())
}

/// Apply a single script command to the workbench.
fn apply_command(bench: &mut Workbench, line_no: usize, line: &str) -> Result<()> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    let rest: Vec<&str> = words.collect();

    match command {
        "place" => {
            let [kind, x, y]: [&str; 3] = expect_args(line_no, &rest)?;
            let kind: ComponentKind = kind
                .parse()
                .map_err(|e: String| BreadboardError::script(line_no, e))?;
            let id = bench.add_component(kind, parse_point(line_no, x, y)?)?;
            println!("placed {kind} as {id}");
        }
        "move" => {
            let [id, x, y]: [&str; 3] = expect_args(line_no, &rest)?;
            let id = parse_id(line_no, id)?;
            let candidate = parse_point(line_no, x, y)?;
            if bench.store().contains(id) {
                let final_pos = bench.drag_component(id, candidate)?;
                println!("moved {id} to {final_pos}");
            } else {
                println!("ignored move of unknown {id}");
            }
        }
        "rotate" => {
            let [id, degrees]: [&str; 2] = expect_args(line_no, &rest)?;
            let id = parse_id(line_no, id)?;
            let degrees = parse_number(line_no, degrees)?;
            bench.rotate_component(id, degrees)?;
        }
        "toggle" => {
            let [id]: [&str; 1] = expect_args(line_no, &rest)?;
            bench.toggle_switch(parse_id(line_no, id)?);
        }
        "remove" => {
            let [id]: [&str; 1] = expect_args(line_no, &rest)?;
            bench.remove_component(parse_id(line_no, id)?);
        }
        other => {
            return Err(BreadboardError::script(
                line_no,
                format!("unknown command '{other}'"),
            ));
        }
    }

    Ok(())
}

/// Require an exact argument count, or fail with the line number.
fn expect_args<'a, const N: usize>(line_no: usize, rest: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(rest.to_vec()).map_err(|_| {
        BreadboardError::script(
            line_no,
            format!("expected {N} argument(s), got {}", rest.len()),
        )
    })
}

fn parse_number(line_no: usize, word: &str) -> Result<f64> {
    word.parse()
        .map_err(|_| BreadboardError::script(line_no, format!("invalid number '{word}'")))
}

fn parse_point(line_no: usize, x: &str, y: &str) -> Result<Point> {
    Ok(Point::new(
        parse_number(line_no, x)?,
        parse_number(line_no, y)?,
    ))
}

fn parse_id(line_no: usize, word: &str) -> Result<ComponentId> {
    word.parse()
        .map(ComponentId)
        .map_err(|_| BreadboardError::script(line_no, format!("invalid component id '{word}'")))
}

/// Print the energized set and power status.
fn print_state(bench: &Workbench) {
    let mut energized: Vec<ComponentId> = bench.energized_ids().iter().copied().collect();
    energized.sort();

    for comp in bench.store().iter() {
        let lit = if energized.contains(&comp.id) { "on" } else { "off" };
        println!("  {} {} at {} [{lit}]", comp.id, comp.kind, comp.position);
    }
    println!(
        "power: {}",
        if bench.power_active() { "active" } else { "inactive" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_line(err: BreadboardError) -> usize {
        match err {
            BreadboardError::ScriptError { line, .. } => line,
            other => panic!("expected a script error, got {other}"),
        }
    }

    #[test]
    fn test_scenario_script() {
        let mut bench = Workbench::new();
        let script = "\
            place battery 50 50\n\
            place switch 150 50\n\
            place bulb 250 50\n";
        run_script(&mut bench, script, false).unwrap();
        assert_eq!(bench.store().len(), 3);
        assert!(!bench.power_active());

        run_script(&mut bench, "toggle 1\n", false).unwrap();
        assert!(bench.power_active());
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let mut bench = Workbench::new();
        let script = "\
            # full-line comment\n\
            \n\
            place battery 50 50  # trailing comment\n\
            \n";
        run_script(&mut bench, script, false).unwrap();
        assert_eq!(bench.store().len(), 1);
    }

    #[test]
    fn test_unknown_command_reports_line_number() {
        let mut bench = Workbench::new();
        let script = "place battery 0 0\nblink 0\n";
        let err = run_script(&mut bench, script, false).unwrap_err();
        assert_eq!(script_line(err), 2);
    }

    #[test]
    fn test_wrong_argument_count() {
        let mut bench = Workbench::new();
        let err = apply_command(&mut bench, 3, "place battery 50").unwrap_err();
        assert_eq!(script_line(err), 3);

        let err = apply_command(&mut bench, 4, "toggle 0 extra").unwrap_err();
        assert_eq!(script_line(err), 4);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let mut bench = Workbench::new();
        let err = apply_command(&mut bench, 1, "place resistor 0 0").unwrap_err();
        assert_eq!(script_line(err), 1);
        assert!(bench.store().is_empty());
    }

    #[test]
    fn test_bad_id_and_bad_number_are_rejected() {
        let mut bench = Workbench::new();
        let err = apply_command(&mut bench, 5, "toggle first").unwrap_err();
        assert_eq!(script_line(err), 5);

        let err = apply_command(&mut bench, 6, "place battery here there").unwrap_err();
        assert_eq!(script_line(err), 6);
    }

    #[test]
    fn test_move_of_unknown_id_is_a_noop() {
        let mut bench = Workbench::new();
        apply_command(&mut bench, 1, "move 9 10 10").unwrap();
        assert!(bench.store().is_empty());
    }
}
