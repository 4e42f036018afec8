mod bundler;
pub use {
  bundler::Bundler,
  minipack_core::{
    Asset, AssetId, BuildError, BuildResult, BundleOutput, DepMapping, EsVersion, InputOptions,
    Loader, ModuleSharing, OutputOptions, SwcTransformer, TransformOutput, TransformService,
  },
};
