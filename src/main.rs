use clap::Parser;
use geo_suggest_context as gsc;
use itertools::Itertools;
use serde_json::Value;

/// Parse a geo suggestion context fragment and print its normalized form.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Context fragment as JSON. A bare argument that is not valid JSON is
    /// treated as a geohash string.
    fragment: String,
    /// Also print the geohash cell at this precision.
    #[arg(long)]
    cell: Option<usize>,
    /// With --cell, also print the eight adjacent cells.
    #[arg(long)]
    neighbours: bool,
    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Accept either a JSON fragment or a bare geohash.
    let fragment: Value = serde_json::from_str(&args.fragment)
        .unwrap_or_else(|_| Value::String(args.fragment.clone()));

    // Parse and validate the context.
    let context = match gsc::parse(&fragment) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Output the normalized form.
    let out = gsc::to_value(&context);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&out)
    } else {
        serde_json::to_string(&out)
    };
    println!("{}", rendered.unwrap());

    // Optionally show the geohash cell and its neighbours.
    if let Some(precision) = args.cell {
        let point = context.location();
        match point.geohash(precision) {
            Ok(hash) => println!("cell: {hash}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        if args.neighbours {
            match point.neighbour_cells(precision) {
                Ok(cells) => println!("neighbours: {}", cells.iter().join(", ")),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
