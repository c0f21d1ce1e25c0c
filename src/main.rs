use std::error::Error;
use subnet_condense::cmd::{parse_args, OutputFormat};
use subnet_condense::input::read_address_tokens;
use subnet_condense::models::CondenseConfig;
use subnet_condense::output::{print_csv, print_json, print_subnets, print_summary};
use subnet_condense::processing::condense_report;
use subnet_condense::{condense_addresses, parse_and_validate};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = parse_args(std::env::args().skip(1))?;

    let config = match args.min_utilization {
        Some(ratio) => CondenseConfig::new(ratio)?,
        None => CondenseConfig::from_env()?,
    };

    let tokens = if args.tokens.is_empty() {
        read_address_tokens(args.file.as_deref())?
    } else {
        args.tokens
    };

    let addrs = parse_and_validate(&tokens)?;
    let subnets = condense_addresses(&addrs, &config)?;
    let rows = condense_report(&addrs, &subnets);

    match args.format {
        OutputFormat::Terminal => {
            print_subnets(&rows);
            print_summary(&rows, addrs.len());
        }
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Json => print_json(&rows)?,
    }

    Ok(())
}
