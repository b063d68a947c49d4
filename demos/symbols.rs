use clap::Parser;

use sigma_rs::set::{Set, Universe};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Labels of the universe.
    #[arg(long, value_delimiter = ',', default_value = "a,b,c,d")]
    universe: Vec<String>,

    /// Labels of the first set.
    #[arg(long, value_delimiter = ',', default_value = "a,b")]
    first: Vec<String>,

    /// Labels of the second set.
    #[arg(long, value_delimiter = ',', default_value = "b,c")]
    second: Vec<String>,

    /// Log every algebra step.
    #[clap(long)]
    verbose: bool,
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

    let universe = Universe::new(args.universe.iter().map(String::as_str));
    let first = Set::from_labels(&universe, args.first.iter().map(String::as_str))?;
    let second = Set::from_labels(&universe, args.second.iter().map(String::as_str))?;

    println!("A = {}", first);
    println!("B = {}", second);
    println!("A u B = {}", &first | &second);
    println!("A n B = {}", &first & &second);
    println!("A - B = {}", &first - &second);
    println!("~A = {}", !&first);
    println!("A contains B: {}", first.contains(&second));

    Ok(())
}
