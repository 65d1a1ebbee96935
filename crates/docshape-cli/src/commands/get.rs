//! Get command

use crate::app::GetArgs;
use crate::commands::{print_values, read_documents};
use anyhow::Result;
use docshape_core::path;
use serde_json::Value;

pub fn run(args: GetArgs) -> Result<()> {
    let docs = read_documents(&args.input)?;

    let values = docs
        .iter()
        .map(|doc| Ok(path::get(doc, &args.path)?.cloned().unwrap_or(Value::Null)))
        .collect::<Result<Vec<Value>>>()?;

    print_values(&values, false)
}
