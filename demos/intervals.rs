use clap::Parser;

use sigma_rs::interval::{closed, closed_open, open_closed, reals, Interval};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Closed intervals to unite, as `LOWER,UPPER` pairs.
    #[arg(value_name = "LOWER,UPPER", default_values = ["0,1", "0.5,1.5", "1.5,2", "2,3"])]
    intervals: Vec<String>,

    /// Log every algebra step.
    #[clap(long)]
    verbose: bool,
}

fn parse_pair(text: &str) -> color_eyre::Result<(f64, f64)> {
    let (lower, upper) = text
        .split_once(',')
        .ok_or_else(|| color_eyre::eyre::eyre!("expected LOWER,UPPER, got '{}'", text))?;
    Ok((lower.trim().parse()?, upper.trim().parse()?))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let mut union = Interval::empty(());
    for text in &args.intervals {
        let (lower, upper) = parse_pair(text)?;
        let interval = closed(lower, upper);
        union = union.union_with(&interval);
        println!("u {} => {}", interval, union);
    }

    println!("union = {}", union);
    println!("complement = {}", union.complement());
    println!("union is disjoint: {}", union.is_disjoint());

    let a = closed_open(0.0, 1.0);
    let b = open_closed(0.5, 1.5);
    println!("{} n {} = {}", a, b, &a & &b);
    println!("{} - {} = {}", a, b, &a - &b);
    println!("{} - {} = {}", reals(), a, &reals() - &a);

    Ok(())
}
