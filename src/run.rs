use crate::args::{Invocation, Run};
use serde_yaml::from_reader;
use std::fs::File;
use thiserror::Error;
use tracing::debug;

pub fn run(invocation: Invocation) -> Result<(), String> {
    match invocation {
        Invocation::Run(run) => run_yaml(run).map_err(|e| format!("{}", e)),
        Invocation::Slots(slots) => {
            crate::slots::list_slots(&slots);
            Ok(())
        }
        Invocation::Validate(validate) => {
            crate::validate::check(&validate).map_err(|e| format!("{}", e))
        }
        Invocation::Book(book) => crate::booking::book(&book).map_err(|e| format!("{}", e)),
        Invocation::Access(access) => crate::access::access(&access).map_err(|e| format!("{}", e)),
    }
}

fn run_yaml(opts: Run) -> Result<(), RunError> {
    debug!("Reading invocation from {}", opts.config.display());
    let file = File::open(opts.config)?;
    let invocation = from_reader(file)?;
    run(invocation).map_err(RunError::Cmd)
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Could not open specified YAML configuration file: {0}")]
    IO(#[from] std::io::Error),
    #[error("Could not parse specified YAML configuration file: {0}")]
    Deserialize(#[from] serde_yaml::Error),
    #[error("{0}")]
    Cmd(String),
}
