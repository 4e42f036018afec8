use std::sync::Arc;

use derivative::Derivative;
use tracing::instrument;

use crate::{
  Asset, AssetGraph, BuildResult, Bundle, InputOptions, OutputOptions, SharedTransformService,
  SwcTransformer, TransformService,
};

#[derive(Derivative)]
#[derivative(Debug)]
pub struct BundlerCore {
  input_options: InputOptions,
  #[derivative(Debug = "ignore")]
  transformer: SharedTransformService,
}

#[derive(Debug)]
pub struct BundleOutput {
  /// The self-executing bundle.
  pub code: String,
  /// The graph it was built from, in id order.
  pub assets: Vec<Asset>,
}

impl BundlerCore {
  pub fn new(input_opts: InputOptions) -> Self {
    Self::with_transformer(input_opts, SwcTransformer::new())
  }

  pub fn with_transformer(
    input_opts: InputOptions,
    transformer: impl TransformService + 'static,
  ) -> Self {
    minipack_tracing::enable_tracing_on_demand();
    Self {
      input_options: input_opts,
      transformer: Arc::new(transformer),
    }
  }

  pub fn input_options(&self) -> &InputOptions {
    &self.input_options
  }

  /// Nothing is emitted unless every reachable file loads and transforms.
  #[instrument(skip_all)]
  pub async fn build(&mut self, output_opts: &OutputOptions) -> BuildResult<BundleOutput> {
    tracing::debug!("{:#?}", self.input_options);
    tracing::debug!("{:#?}", output_opts);
    let graph = AssetGraph::build(&self.input_options, self.transformer.clone()).await?;
    let code = Bundle::new(graph.assets(), output_opts).generate()?;
    Ok(BundleOutput {
      code,
      assets: graph.into_assets(),
    })
  }
}
