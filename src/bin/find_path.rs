use path_finder::algorithm::ShortestPathAlgorithm;
use path_finder::{normalize_label, render_diagram, sample_graph, Dijkstra, Locale};
use std::env;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("usage: find_path <START> <END> [--locale en|es]");
    eprintln!();
    eprintln!("Node labels are trimmed and upper-cased before lookup (\" a\" finds A).");
    eprintln!("Messages are in English unless --locale es is given.");
    ExitCode::from(1)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();

    let mut positional = Vec::new();
    let mut locale = Locale::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--locale" {
            let Some(value) = args.next() else {
                return Ok(usage());
            };
            locale = value.parse()?;
        } else {
            positional.push(arg);
        }
    }

    let [start, end] = positional.as_slice() else {
        return Ok(usage());
    };

    let graph = sample_graph();
    let result = Dijkstra::new()
        .with_locale(locale)
        .find_path(&graph, &normalize_label(start), &normalize_label(end));

    println!("{}", result.message);
    if result.is_found() && result.total_weight > 0 {
        println!("{}: {}", locale.total_weight_caption(), result.total_weight);
    }
    println!();
    println!("{}", render_diagram(&graph, &result.path));

    Ok(if result.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
