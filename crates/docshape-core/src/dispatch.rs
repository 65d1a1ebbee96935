//! Output selection and rendering for one request
//!
//! Results are returned raw (the default output) unless documents were
//! included and a known format was requested, in which case documents are
//! transformed, restricted to the export keys and formatted.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::params::RenderParams;
use crate::project::project_all;
use crate::render::{json, FormatOptions, OutputFormat, Rendered};
use crate::transform::{DocumentTransform, TransformRegistry};
use serde_json::Value;
use std::sync::Arc;

/// Output chosen for a request
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The result collection as JSON, untouched
    Default {
        callback: Option<String>,
        debug: bool,
    },
    /// Transformed documents in the requested format
    Documents {
        format: OutputFormat,
        options: FormatOptions,
        callback: Option<String>,
    },
}

impl Output {
    /// Render documents with this output
    pub fn render(
        &self,
        docs: Vec<Value>,
        transform: &dyn DocumentTransform,
        config: &RenderConfig,
    ) -> Result<Rendered> {
        match self {
            Self::Default { callback, debug } => {
                let rendered = Rendered {
                    body: json::format_documents(&docs, *debug)?,
                    content_type: json::CONTENT_TYPE.to_string(),
                };
                Ok(wrap_callback(rendered, callback.as_deref(), config))
            }
            Self::Documents {
                format,
                options,
                callback,
            } => {
                let docs = docs
                    .into_iter()
                    .map(|doc| transform.apply(doc))
                    .collect::<Result<Vec<_>>>()?;
                tracing::debug!(
                    "Applied transform '{}' to {} documents",
                    transform.name(),
                    docs.len()
                );

                let rendered = match format {
                    OutputFormat::Csv => format.render(&docs, options)?,
                    OutputFormat::Json | OutputFormat::Xml => {
                        let docs = project_all(docs, &options.keys)?;
                        format.render(&docs, options)?
                    }
                };
                Ok(wrap_callback(rendered, callback.as_deref(), config))
            }
        }
    }
}

/// Selects and runs the output for each request
pub struct OutputDispatcher {
    config: RenderConfig,
    transform: Arc<dyn DocumentTransform>,
}

impl OutputDispatcher {
    /// Create a dispatcher using the built-in transforms
    pub fn new(config: RenderConfig) -> Result<Self> {
        Self::with_registry(config, &TransformRegistry::with_defaults())
    }

    /// Create a dispatcher resolving the configured transform in `registry`
    pub fn with_registry(config: RenderConfig, registry: &TransformRegistry) -> Result<Self> {
        config.validate()?;
        let transform = registry.resolve(&config.transform)?;
        Ok(Self { config, transform })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Choose the output for a request
    pub fn select(&self, params: &RenderParams) -> Output {
        let format = params.output_format.as_deref().and_then(|requested| {
            let format = OutputFormat::parse(requested);
            if format.is_none() {
                tracing::warn!("Unknown output format '{}', using default output", requested);
            }
            format
        });

        let output = match format {
            Some(format) if params.include_docs => Output::Documents {
                format,
                options: FormatOptions {
                    keys: params.export_keys.clone(),
                    labels: params.csv_labels.clone(),
                    delimiter: params.csv_delimiter.clone(),
                    pretty: params.debug,
                    ..FormatOptions::from_config(&self.config)
                },
                callback: params.callback.clone(),
            },
            _ => Output::Default {
                callback: params.callback.clone(),
                debug: params.debug,
            },
        };

        tracing::debug!(
            "Output: {:?} - Keys: {} - Transform: {}",
            output,
            params.export_keys.len(),
            self.transform.name()
        );
        output
    }

    /// Validate the request, select its output and render `docs`
    pub fn render(&self, params: &RenderParams, docs: Vec<Value>) -> Result<Rendered> {
        params.validate()?;
        self.select(params)
            .render(docs, self.transform.as_ref(), &self.config)
    }
}

fn wrap_callback(rendered: Rendered, callback: Option<&str>, config: &RenderConfig) -> Rendered {
    match callback {
        Some(callback) => Rendered {
            body: format!("{}({})", callback, rendered.body),
            content_type: config.callback_content_type.clone(),
        },
        None => rendered,
    }
}
