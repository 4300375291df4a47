// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later
use std::fs;
use std::path::PathBuf;

use clap::{ArgEnum, Parser};
use costar::{DemonstrationInfo, NamingStyle, TaskParser, TaskParserConfig, TaskParserResult};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Naming {
    Unique,
    Same,
}

/// An example showing how to parse recorded demonstrations from JSON files and print the
/// resulting action sequences, transitions and object classes.
#[derive(Parser, Debug)]
#[clap(author, version, name = "parse_demonstration")]
struct CommandLineArguments {
    /// JSON files, each containing one demonstration
    #[clap(required = true)]
    pub demonstrations: Vec<PathBuf>,
    /// Naming policy for actions
    #[clap(long, arg_enum, default_value = "unique")]
    pub naming: Naming,
    /// Base action names to skip, can be given several times
    #[clap(long = "ignore")]
    pub ignore_actions: Vec<String>,
}

fn main() -> TaskParserResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = CommandLineArguments::parse();
    let config = TaskParserConfig {
        naming_style: match args.naming {
            Naming::Unique => NamingStyle::Unique,
            Naming::Same => NamingStyle::Same,
        },
        ignore_actions: args.ignore_actions,
        ..TaskParserConfig::default()
    };
    let mut parser = TaskParser::from_config(&config);
    for path in args.demonstrations.iter() {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                error!(path = %path.display(), error = %e, "cannot read demonstration");
                continue;
            }
        };
        let parsed = DemonstrationInfo::from_json(&json)
            .and_then(|demonstration| parser.add_demonstration_info(&demonstration));
        if let Err(e) = parsed {
            error!(path = %path.display(), error = %e, "skipping demonstration");
        }
    }

    for (i, sequence) in parser.demonstrations().iter().enumerate() {
        let names: Vec<String> = sequence
            .iter()
            .map(|action| format!("{} [{}]", action.full_name, action.arm))
            .collect();
        println!("demonstration {}: {}", i, names.join(" -> "));
    }
    for (name, transitions) in parser.transitions().transitions() {
        let successors: Vec<&str> = transitions.iter().map(|t| t.to.as_str()).collect();
        println!("{} => {:?}", name, successors);
    }
    for class in parser.registry().classes() {
        let objects: Vec<&str> = parser
            .registry()
            .objects_of(class)
            .map(|objects| objects.iter().map(String::as_str).collect())
            .unwrap_or_default();
        println!("{}: {:?}", class, objects);
    }
    Ok(())
}
