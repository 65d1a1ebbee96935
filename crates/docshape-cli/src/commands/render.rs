//! Render command

use crate::app::RenderArgs;
use crate::commands::read_documents;
use anyhow::Result;
use docshape_core::params::split_list;
use docshape_core::{row_docs, Config, OutputDispatcher, RenderParams};

pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let dispatcher = OutputDispatcher::new(config.render.clone())?;
    let params = build_params(&args);

    let mut docs = read_documents(&args.input)?;
    if args.unwrap_rows {
        docs = row_docs(&docs)?;
    }

    let rendered = dispatcher.render(&params, docs)?;

    if args.show_content_type {
        eprintln!("Content-Type: {}", rendered.content_type);
    }
    print!("{}", rendered.body);
    Ok(())
}

/// Query string values first, then explicit flags on top
fn build_params(args: &RenderArgs) -> RenderParams {
    let mut params = args
        .query
        .as_deref()
        .map(RenderParams::from_query)
        .unwrap_or_default();

    if let Some(format) = &args.output_format {
        params.output_format = Some(format.clone());
    }
    if args.include_docs {
        params.include_docs = true;
    }
    if let Some(keys) = &args.export_keys {
        params.export_keys = split_list(keys);
    }
    if let Some(labels) = &args.csv_labels {
        params.csv_labels = split_list(labels);
    }
    if let Some(delimiter) = &args.csv_delimiter {
        params.csv_delimiter = Some(delimiter.clone());
    }
    if let Some(callback) = &args.callback {
        params.callback = Some(callback.clone());
    }
    if args.debug {
        params.debug = true;
    }

    params
}
