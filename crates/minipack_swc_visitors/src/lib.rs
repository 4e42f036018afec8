mod collect_imports;
pub use collect_imports::*;
mod downlevel;
pub use downlevel::*;
mod resolve;
pub use resolve::*;
mod to_cjs;
pub use to_cjs::*;
mod ts_to_js;
pub use ts_to_js::*;
