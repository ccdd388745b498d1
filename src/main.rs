use clap::Parser;
use std::io::Read;

use bash_declare::formats::{detect_format_from_extension, parse_variables, Format};
use bash_declare::{generate, DynValue, Generated};

#[derive(Parser)]
#[command(name = "bash-declare")]
#[command(about = "Prepends a bash script with variable declarations based on given values")]
#[command(version)]
struct Cli {
    /// Script source from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// File containing the variables to declare (json, yaml, or toml)
    #[arg(long = "vars")]
    vars_file: Option<String>,

    /// Format of the variables file, when the extension is not enough
    #[arg(long = "format")]
    format: Option<String>,

    /// Output result as JSON ({"script": ...})
    #[arg(long = "json")]
    json: bool,

    /// Script file to read
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Determine script source: -c, file, or stdin
    let source = if let Some(s) = cli.script {
        s
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        use std::io::IsTerminal;
        if std::io::stdin().is_terminal() {
            eprintln!("Error: No script provided. Use -c 'script', provide a script file, or pipe via stdin.");
            std::process::exit(1);
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        buf
    };

    let variables = match cli.vars_file {
        Some(ref file) => {
            let format = match cli.format {
                Some(ref name) => match Format::from_name(name) {
                    Some(format) => format,
                    None => {
                        eprintln!("Error: Unknown variables format: {}", name);
                        std::process::exit(1);
                    }
                },
                None => match detect_format_from_extension(file) {
                    Some(format) => format,
                    None => {
                        eprintln!(
                            "Error: Cannot detect format of {}; use --format json|yaml|toml",
                            file
                        );
                        std::process::exit(1);
                    }
                },
            };
            let content = match std::fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error: Cannot read variables file: {}: {}", file, e);
                    std::process::exit(1);
                }
            };
            match parse_variables(&content, format) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => DynValue::Map(Default::default()),
    };

    match generate(&source, &variables) {
        Ok(Generated::Script(script)) => {
            if cli.json {
                println!("{}", serde_json::json!({ "script": script }));
            } else {
                print!("{}", script);
            }
        }
        Ok(Generated::Deferred) => {
            eprintln!("Error: variables are not yet known");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
