//! Project command

use crate::app::ProjectArgs;
use crate::commands::{print_values, read_documents};
use anyhow::Result;
use docshape_core::params::split_list;
use docshape_core::project_all;

pub fn run(args: ProjectArgs) -> Result<()> {
    let keys = split_list(&args.keys);
    let docs = read_documents(&args.input)?;
    let projected = project_all(docs, &keys)?;
    print_values(&projected, args.pretty)
}
