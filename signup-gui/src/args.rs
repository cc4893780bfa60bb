use std::{error::Error, path::PathBuf, process};

use crate::{dir::SignupDirectory, VERSION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    DatadirPath(SignupDirectory),
    ApiUrl(String),
}

/// Parse command-line arguments, `args[0]` being the program name.
///
/// Prints the version or the usage and exits on `--version` and `--help`.
pub fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: signup [OPTIONS]

Options:
    --datadir <PATH>    Path of the signup datadir
    --api-url <URL>     Base URL of the registration API
    -v, --version       Display signup version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--datadir" => {
                let a = args.get(i + 1).ok_or("missing arg to --datadir")?;
                res.push(Arg::DatadirPath(SignupDirectory::new(PathBuf::from(a))));
                i += 2;
            }
            "--api-url" => {
                let a = args.get(i + 1).ok_or("missing arg to --api-url")?;
                res.push(Arg::ApiUrl(a.clone()));
                i += 2;
            }
            arg => return Err(format!("unknown argument {}", arg).into()),
        }
    }

    Ok(res)
}

pub fn datadir(args: &[Arg]) -> Option<&SignupDirectory> {
    args.iter().rev().find_map(|arg| match arg {
        Arg::DatadirPath(dir) => Some(dir),
        _ => None,
    })
}

pub fn api_url(args: &[Arg]) -> Option<&str> {
    args.iter().rev().find_map(|arg| match arg {
        Arg::ApiUrl(url) => Some(url.as_str()),
        _ => None,
    })
}
