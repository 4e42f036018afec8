use std::sync::Arc;

mod asset;
pub use asset::*;
mod bundle;
pub use bundle::*;
mod bundler;
pub use bundler::*;
mod graph;
pub use graph::*;
mod module_loader;
mod options;
pub use options::*;
mod runtime;
mod transform;
pub use transform::*;

use minipack_resolver::Resolver;

pub(crate) type SharedResolver = Arc<Resolver>;

// public exports

pub type BuildResult<T> = minipack_error::Result<T>;
pub type BuildError = minipack_error::Error;
pub use minipack_common::{AssetId, DepMapping, Loader};
pub use swc_core::ecma::ast::EsVersion;
