//! Command-line argument handling for the condense binary.

use std::error::Error;

/// Output form selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Csv,
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug)]
pub struct Args {
    /// Optional file to read the address list from; stdin when absent and no
    /// addresses were passed as arguments.
    pub file: Option<String>,
    /// Utilization floor from `--min-utilization`; the environment supplies
    /// the value when absent.
    pub min_utilization: Option<f64>,
    /// Selected output form.
    pub format: OutputFormat,
    /// Address tokens passed directly as arguments.
    pub tokens: Vec<String>,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Args, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args {
        file: None,
        min_utilization: None,
        format: OutputFormat::Terminal,
        tokens: Vec::new(),
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => parsed.format = OutputFormat::Csv,
            "--json" => parsed.format = OutputFormat::Json,
            "--file" => {
                let file = args.next().ok_or("--file requires a path")?;
                parsed.file = Some(file);
            }
            "--min-utilization" => {
                let raw = args.next().ok_or("--min-utilization requires a value")?;
                let ratio = raw
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid --min-utilization value: {raw}"))?;
                parsed.min_utilization = Some(ratio);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown option: {flag}").into());
            }
            _ => parsed.tokens.push(arg),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let parsed = parse_args(args(&[])).unwrap();
        assert!(parsed.file.is_none());
        assert!(parsed.min_utilization.is_none());
        assert_eq!(parsed.format, OutputFormat::Terminal);
        assert!(parsed.tokens.is_empty());
    }

    #[test]
    fn test_parse_args_addresses() {
        let parsed = parse_args(args(&["10.0.0.0", "10.0.0.3"])).unwrap();
        assert_eq!(parsed.tokens, vec!["10.0.0.0", "10.0.0.3"]);
    }

    #[test]
    fn test_parse_args_flags() {
        let parsed = parse_args(args(&[
            "--csv",
            "--file",
            "addresses.txt",
            "--min-utilization",
            "0.5",
        ]))
        .unwrap();
        assert_eq!(parsed.format, OutputFormat::Csv);
        assert_eq!(parsed.file.as_deref(), Some("addresses.txt"));
        assert_eq!(parsed.min_utilization, Some(0.5));
    }

    #[test]
    fn test_parse_args_json_with_addresses() {
        let parsed = parse_args(args(&["--json", "10.0.0.0", "10.0.0.1"])).unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
        assert_eq!(parsed.tokens.len(), 2);
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["--file"])).is_err());
        assert!(parse_args(args(&["--min-utilization", "abc"])).is_err());
    }
}
