//! Flatten command

use crate::app::FlattenArgs;
use crate::commands::{print_values, read_documents};
use anyhow::Result;
use docshape_core::flatten_all;
use docshape_core::params::split_list;
use serde_json::Value;

pub fn run(args: FlattenArgs) -> Result<()> {
    let keys = args.keys.as_deref().map(split_list).unwrap_or_default();
    let docs = read_documents(&args.input)?;

    let flat: Vec<Value> = flatten_all(&docs, &keys)?
        .into_iter()
        .map(Value::Object)
        .collect();

    print_values(&flat, args.pretty)
}
