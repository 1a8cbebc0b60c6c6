use anyhow::{Context, Result};
use clap::Parser;
use day12::{CLIArgs, PathSolver};

fn main() -> Result<()> {
    day12::init_logger();
    let args = CLIArgs::parse();
    log::info!("Reading height map from {}.", args.input_path.display());
    let graph = day12::read_graph(&args.input_path).with_context(|| {
        format!(
            "Failed to read height map from given file({}).",
            args.input_path.display()
        )
    })?;

    let start = graph.start();
    let start_pos = graph.position(start).context("Start vertex is outside of map.")?;
    let end_pos = graph.position(graph.end()).context("End vertex is outside of map.")?;
    let mut solver = PathSolver::new(&graph);
    if let Some(path) = solver.shortest_path(start)? {
        println!(
            "The fewest steps from start position {} to end position {} is {}.",
            start_pos,
            end_pos,
            path.steps_n()
        );
        if args.show_path {
            print!("{}", path);
        }
    } else {
        eprintln!(
            "There's no path from start position {} to end position {}.",
            start_pos, end_pos
        );
    }

    Ok(())
}
